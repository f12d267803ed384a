//! Request origin tracking: geolocation fallback and user-agent heuristics

use crate::error::BoundaryError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Geographic metadata for a network address, mirroring the ip-api.com
/// response shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub status: String,
    pub city: String,
    pub country: String,
    pub region: String,
    pub region_name: String,
    pub country_code: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,

    /// The address that was looked up
    pub query: String,
}

impl LocationData {
    /// Fixed result used when the caller is on a loopback/local address and
    /// no upstream lookup makes sense
    #[must_use]
    pub fn local(ip: &str) -> Self {
        Self {
            status: "success".to_string(),
            city: "Localhost".to_string(),
            country: "Local".to_string(),
            region: "Local".to_string(),
            region_name: "Local".to_string(),
            country_code: "LOC".to_string(),
            lat: 0.0,
            lon: 0.0,
            timezone: "UTC".to_string(),
            query: ip.to_string(),
        }
    }
}

/// True for loopback addresses, including when they appear inside a
/// forwarded-for list.
///
/// The substring test deliberately over-matches: addresses such as
/// `127.0.0.10` or `2001::1` also count as local and get the fallback
/// rather than an upstream lookup.
#[must_use]
pub fn is_local_address(ip: &str) -> bool {
    ip.contains("::1") || ip.contains("127.0.0.1")
}

/// Geolocation seam: the third-party IP lookup lives behind this trait
pub trait GeoLookup {
    fn locate(&self, ip: &str) -> std::result::Result<LocationData, BoundaryError>;
}

static ANDROID_MODEL_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"Android [^;)]+; ([^;)]+)[;)]").unwrap());

/// Best-effort browser/OS/device identification from a user-agent string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceInfo {
    pub browser: Option<String>,
    pub os: Option<String>,
    pub device_model: String,
}

impl DeviceInfo {
    /// Parse a raw user-agent header. Unrecognized agents yield `None`
    /// fields and the "Unknown Device" model.
    #[must_use]
    pub fn parse(user_agent: &str) -> Self {
        let browser = detect_browser(user_agent);
        let os = detect_os(user_agent);
        let device_model = detect_model(user_agent);
        Self {
            browser,
            os,
            device_model,
        }
    }
}

fn detect_browser(ua: &str) -> Option<String> {
    // Order matters: Chrome-derived agents also contain "Chrome" and
    // "Safari"
    let name = if ua.contains("Edg/") || ua.contains("Edge/") {
        "Edge"
    } else if ua.contains("OPR/") || ua.contains("Opera") {
        "Opera"
    } else if ua.contains("Firefox/") {
        "Firefox"
    } else if ua.contains("Chrome/") {
        "Chrome"
    } else if ua.contains("Safari/") {
        "Safari"
    } else {
        return None;
    };
    Some(name.to_string())
}

fn detect_os(ua: &str) -> Option<String> {
    let name = if ua.contains("Windows NT") {
        "Windows"
    } else if ua.contains("Android") {
        "Android"
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        "iOS"
    } else if ua.contains("Mac OS X") {
        "macOS"
    } else if ua.contains("Linux") {
        "Linux"
    } else {
        return None;
    };
    Some(name.to_string())
}

fn detect_model(ua: &str) -> String {
    if ua.contains("iPhone") {
        return "iPhone".to_string();
    }
    if ua.contains("iPad") {
        return "iPad".to_string();
    }
    if let Some(caps) = ANDROID_MODEL_REGEX.captures(ua)
        && let Some(model) = caps.get(1)
    {
        return model.as_str().trim().to_string();
    }
    "Unknown Device".to_string()
}

/// Combined tracking result for one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub ip: String,
    pub user_agent: String,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub device_model: String,
    pub location_data: LocationData,
}

/// Resolve geographic and device metadata for a request.
///
/// Loopback addresses never reach the `geo` collaborator and get the fixed
/// local fallback; any other address is looked up and upstream failures
/// propagate to the caller.
pub fn track(
    ip: &str,
    user_agent: &str,
    geo: &dyn GeoLookup,
) -> std::result::Result<TrackingInfo, BoundaryError> {
    let location_data = if is_local_address(ip) {
        debug!("Local address {ip}, skipping geolocation");
        LocationData::local(ip)
    } else {
        geo.locate(ip)?
    };

    let device = DeviceInfo::parse(user_agent);

    Ok(TrackingInfo {
        ip: ip.to_string(),
        user_agent: user_agent.to_string(),
        browser: device.browser,
        os: device.os,
        device_model: device.device_model,
        location_data,
    })
}
