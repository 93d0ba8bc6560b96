//! One-call helpers for the common verbs.
//!
//! Each helper builds a `RequestBuilder`, applies the headers and body it was
//! given, and reads the response: string or binary, returning an error or
//! panicking. Anything other than `200 OK` is an error.
//!
//! Header pairs go through `RequestBuilder::with_headers`, so names are
//! canonicalized and values coerced through `Value`. Pass an empty iterator
//! (for example `None::<(&str, &str)>`) to send no extra headers.

use crate::builder::RequestBuilder;
use crate::error::Result;
use crate::value::Value;

// GET

/// Send a GET request and return the response body as text.
pub fn get(uri: &str) -> Result<String> {
    RequestBuilder::new("GET", uri).read_string()
}

/// `get` with extra headers.
pub fn get_with_headers<I, K, V>(uri: &str, headers: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("GET", uri)
        .with_headers(headers)
        .read_string()
}

/// Send a GET request and return the response body as bytes.
pub fn get_binary(uri: &str) -> Result<Vec<u8>> {
    RequestBuilder::new("GET", uri).read_binary()
}

/// `get_binary` with extra headers.
pub fn get_binary_with_headers<I, K, V>(uri: &str, headers: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("GET", uri)
        .with_headers(headers)
        .read_binary()
}

/// Panicking version of `get`.
pub fn must_get(uri: &str) -> String {
    RequestBuilder::new("GET", uri).must_read_string()
}

/// `must_get` with extra headers.
pub fn must_get_with_headers<I, K, V>(uri: &str, headers: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("GET", uri)
        .with_headers(headers)
        .must_read_string()
}

/// Panicking version of `get_binary`.
pub fn must_get_binary(uri: &str) -> Vec<u8> {
    RequestBuilder::new("GET", uri).must_read_binary()
}

/// `must_get_binary` with extra headers.
pub fn must_get_binary_with_headers<I, K, V>(uri: &str, headers: I) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("GET", uri)
        .with_headers(headers)
        .must_read_binary()
}

// POST

/// Send a POST request with a string body and return the response body as text.
pub fn post(uri: &str, body: &str) -> Result<String> {
    RequestBuilder::new("POST", uri)
        .set_string_body(body)
        .read_string()
}

/// `post` with extra headers.
pub fn post_with_headers<I, K, V>(uri: &str, body: &str, headers: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("POST", uri)
        .with_headers(headers)
        .set_string_body(body)
        .read_string()
}

/// Send a POST request with a binary body and return the response body as bytes.
pub fn post_binary(uri: &str, body: &[u8]) -> Result<Vec<u8>> {
    RequestBuilder::new("POST", uri)
        .set_binary_body(body)
        .read_binary()
}

/// `post_binary` with extra headers.
pub fn post_binary_with_headers<I, K, V>(uri: &str, body: &[u8], headers: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("POST", uri)
        .with_headers(headers)
        .set_binary_body(body)
        .read_binary()
}

/// Panicking version of `post`.
pub fn must_post(uri: &str, body: &str) -> String {
    RequestBuilder::new("POST", uri)
        .set_string_body(body)
        .must_read_string()
}

/// `must_post` with extra headers.
pub fn must_post_with_headers<I, K, V>(uri: &str, body: &str, headers: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("POST", uri)
        .with_headers(headers)
        .set_string_body(body)
        .must_read_string()
}

/// Panicking version of `post_binary`.
pub fn must_post_binary(uri: &str, body: &[u8]) -> Vec<u8> {
    RequestBuilder::new("POST", uri)
        .set_binary_body(body)
        .must_read_binary()
}

/// `must_post_binary` with extra headers.
pub fn must_post_binary_with_headers<I, K, V>(uri: &str, body: &[u8], headers: I) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("POST", uri)
        .with_headers(headers)
        .set_binary_body(body)
        .must_read_binary()
}

// PUT

/// Send a PUT request with a string body and return the response body as text.
pub fn put(uri: &str, body: &str) -> Result<String> {
    RequestBuilder::new("PUT", uri)
        .set_string_body(body)
        .read_string()
}

/// `put` with extra headers.
pub fn put_with_headers<I, K, V>(uri: &str, body: &str, headers: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("PUT", uri)
        .with_headers(headers)
        .set_string_body(body)
        .read_string()
}

/// Send a PUT request with a binary body and return the response body as bytes.
pub fn put_binary(uri: &str, body: &[u8]) -> Result<Vec<u8>> {
    RequestBuilder::new("PUT", uri)
        .set_binary_body(body)
        .read_binary()
}

/// `put_binary` with extra headers.
pub fn put_binary_with_headers<I, K, V>(uri: &str, body: &[u8], headers: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("PUT", uri)
        .with_headers(headers)
        .set_binary_body(body)
        .read_binary()
}

/// Panicking version of `put`.
pub fn must_put(uri: &str, body: &str) -> String {
    RequestBuilder::new("PUT", uri)
        .set_string_body(body)
        .must_read_string()
}

/// `must_put` with extra headers.
pub fn must_put_with_headers<I, K, V>(uri: &str, body: &str, headers: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("PUT", uri)
        .with_headers(headers)
        .set_string_body(body)
        .must_read_string()
}

/// Panicking version of `put_binary`.
pub fn must_put_binary(uri: &str, body: &[u8]) -> Vec<u8> {
    RequestBuilder::new("PUT", uri)
        .set_binary_body(body)
        .must_read_binary()
}

/// `must_put_binary` with extra headers.
pub fn must_put_binary_with_headers<I, K, V>(uri: &str, body: &[u8], headers: I) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("PUT", uri)
        .with_headers(headers)
        .set_binary_body(body)
        .must_read_binary()
}

// DELETE

/// Send a DELETE request and return the response body as text.
pub fn delete(uri: &str) -> Result<String> {
    RequestBuilder::new("DELETE", uri).read_string()
}

/// `delete` with extra headers.
pub fn delete_with_headers<I, K, V>(uri: &str, headers: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("DELETE", uri)
        .with_headers(headers)
        .read_string()
}

/// Send a DELETE request and return the response body as bytes.
pub fn delete_binary(uri: &str) -> Result<Vec<u8>> {
    RequestBuilder::new("DELETE", uri).read_binary()
}

/// `delete_binary` with extra headers.
pub fn delete_binary_with_headers<I, K, V>(uri: &str, headers: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("DELETE", uri)
        .with_headers(headers)
        .read_binary()
}

/// Panicking version of `delete`.
pub fn must_delete(uri: &str) -> String {
    RequestBuilder::new("DELETE", uri).must_read_string()
}

/// `must_delete` with extra headers.
pub fn must_delete_with_headers<I, K, V>(uri: &str, headers: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("DELETE", uri)
        .with_headers(headers)
        .must_read_string()
}

/// Panicking version of `delete_binary`.
pub fn must_delete_binary(uri: &str) -> Vec<u8> {
    RequestBuilder::new("DELETE", uri).must_read_binary()
}

/// `must_delete_binary` with extra headers.
pub fn must_delete_binary_with_headers<I, K, V>(uri: &str, headers: I) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RequestBuilder::new("DELETE", uri)
        .with_headers(headers)
        .must_read_binary()
}
