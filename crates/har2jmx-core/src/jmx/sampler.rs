//! HTTP sampler assembly: one subtree per request record, composed bottom-up
//! from the argument collection, cookie manager, and header collection.

use url::Url;

use crate::error::ConvertError;
use crate::har::RequestRecord;

use super::element::{bool_prop, collection_prop, long_prop, string_prop, XmlElement};

/// Builds the sampler subtree for one request record.
///
/// The display name and `HTTPSampler.domain` both carry the full URL string;
/// only the port is decomposed out of it. That mirrors the recorded-traffic
/// converters this format comes from and is kept deliberately.
pub fn build_http_sampler(record: &RequestRecord) -> Result<XmlElement, ConvertError> {
    let parsed = Url::parse(&record.url).map_err(|source| ConvertError::MalformedUrl {
        url: record.url.clone(),
        source,
    })?;
    let port = parsed
        .port_or_known_default()
        .map(|p| p.to_string())
        .unwrap_or_default();

    let mut sampler = XmlElement::new("HTTPSamplerProxy")
        .attr("guiclass", "HttpTestSampleGui")
        .attr("testclass", "HTTPSamplerProxy")
        .attr("testname", &record.url)
        .attr("enabled", "true")
        .child(arguments_element(record.post_body.as_deref()))
        .child(string_prop("HTTPSampler.domain", &record.url))
        .child(string_prop("HTTPSampler.port", &port))
        .child(string_prop("HTTPSampler.protocol", "http"))
        .child(string_prop("HTTPSampler.contentEncoding", ""))
        .child(string_prop("HTTPSampler.path", ""))
        .child(string_prop("HTTPSampler.method", &record.method))
        .child(bool_prop("HTTPSampler.follow_redirects", true))
        .child(bool_prop("HTTPSampler.auto_redirects", false))
        .child(bool_prop("HTTPSampler.use_keepalive", true))
        .child(bool_prop("HTTPSampler.DO_MULTIPART_POST", false))
        .child(string_prop("HTTPSampler.embedded_url_re", ""))
        .child(string_prop("HTTPSampler.connect_timeout", ""))
        .child(string_prop("HTTPSampler.response_timeout", ""))
        .child(string_prop("HTTPSampler.implementation", "HttpClient4"))
        .child(bool_prop("HTTPSampler.monitor", false))
        .child(string_prop("HTTPSampler.embedded_url_regex", ""));

    sampler.push(cookie_manager(&record.cookies));

    if !record.headers.is_empty() {
        sampler.push(header_collection(&record.headers)?);
    }

    Ok(sampler)
}

/// The sampler's argument holder. Carries the raw POST body as a single
/// opaque argument when one is present and non-empty; stays empty otherwise.
fn arguments_element(post_body: Option<&str>) -> XmlElement {
    let mut collection = collection_prop("Arguments.arguments");
    if let Some(body) = post_body.filter(|b| !b.is_empty()) {
        collection.push(body_argument(body));
    }
    XmlElement::new("elementProp")
        .attr("name", "HTTPsampler.Arguments")
        .attr("elementType", "Arguments")
        .attr("guiclass", "HTTPArgumentsPanel")
        .attr("testclass", "Arguments")
        .attr("enabled", "true")
        .child(collection)
}

/// One opaque body argument: raw text, "=" metadata, raw-equals semantics.
/// Form-encoded bodies are not decomposed into per-field arguments.
fn body_argument(text: &str) -> XmlElement {
    XmlElement::new("elementProp")
        .attr("name", "")
        .attr("elementType", "HTTPArgument")
        .child(bool_prop("HTTPArgument.always_encode", false))
        .child(string_prop("Argument.value", text))
        .child(string_prop("Argument.metadata", "="))
        .child(bool_prop("HTTPArgument.use_equals", true))
        .child(string_prop("Argument.name", ""))
}

/// Cookie manager, attached to every sampler. The collection is simply empty
/// when the record carried no cookies.
fn cookie_manager(cookies: &[(String, String)]) -> XmlElement {
    let mut collection = collection_prop("CookieManager.cookies");
    for (name, value) in cookies {
        collection.push(cookie_element(name, value));
    }
    XmlElement::new("CookieManager")
        .attr("guiclass", "CookiePanel")
        .attr("testclass", "CookieManager")
        .attr("testname", "HTTP Cookie Manager")
        .attr("enabled", "true")
        .child(collection)
}

/// One cookie with the fixed replay defaults: non-secure, no expiry,
/// domain/path unset, path_spec true, domain_spec false.
fn cookie_element(name: &str, value: &str) -> XmlElement {
    XmlElement::new("elementProp")
        .attr("name", name)
        .attr("elementType", "Cookie")
        .attr("guiclass", "CookiePanel")
        .attr("testclass", "Cookie")
        .attr("testname", name)
        .attr("enabled", "true")
        .child(string_prop("Cookie.name", name))
        .child(string_prop("Cookie.value", value))
        .child(string_prop("Cookie.domain", ""))
        .child(string_prop("Cookie.path", ""))
        .child(bool_prop("Cookie.secure", false))
        .child(long_prop("Cookie.expires", 0))
        .child(bool_prop("Cookie.path_spec", true))
        .child(bool_prop("Cookie.domain_spec", false))
}

/// Header collection, present only when the record has headers. Each
/// `"Name: Value"` string splits on the first colon; the value is trimmed.
fn header_collection(headers: &[String]) -> Result<XmlElement, ConvertError> {
    let mut collection = collection_prop("HTTPSampler.header_manager");
    for header in headers {
        let (name, value) = header
            .split_once(':')
            .ok_or_else(|| ConvertError::MalformedHeader {
                header: header.clone(),
            })?;
        collection.push(header_element(name, value.trim()));
    }
    Ok(collection)
}

fn header_element(name: &str, value: &str) -> XmlElement {
    XmlElement::new("elementProp")
        .attr("name", "")
        .attr("elementType", "Header")
        .child(string_prop("Header.name", name))
        .child(string_prop("Header.value", value))
}
