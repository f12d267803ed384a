use utilbox::*;

const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/120.0.0.0 Safari/537.36";

const ANDROID_PHONE: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) \
                             AppleWebKit/537.36 (KHTML, like Gecko) \
                             Chrome/119.0.0.0 Mobile Safari/537.36";

/// Lookup that panics if consulted, for local-address tests
struct NeverCalled;

impl GeoLookup for NeverCalled {
    fn locate(&self, ip: &str) -> Result<LocationData, BoundaryError> {
        panic!("geolocation consulted for {ip}");
    }
}

/// Lookup returning a fixed remote location
struct FixedLookup;

impl GeoLookup for FixedLookup {
    fn locate(&self, ip: &str) -> Result<LocationData, BoundaryError> {
        let mut data = LocationData::local(ip);
        data.city = "Mountain View".to_string();
        data.country = "United States".to_string();
        data.country_code = "US".to_string();
        Ok(data)
    }
}

#[test]
fn test_loopback_uses_local_fallback() {
    let info = track("127.0.0.1", CHROME_WINDOWS, &NeverCalled).unwrap();

    assert_eq!(info.location_data.city, "Localhost");
    assert_eq!(info.location_data.country_code, "LOC");
    assert_eq!(info.location_data.query, "127.0.0.1");
}

#[test]
fn test_ipv6_loopback_uses_local_fallback() {
    let info = track("::1", CHROME_WINDOWS, &NeverCalled).unwrap();
    assert_eq!(info.location_data.city, "Localhost");
}

#[test]
fn test_forwarded_list_containing_loopback_is_local() {
    assert!(is_local_address("127.0.0.1, 10.0.0.2"));
    assert!(!is_local_address("8.8.8.8"));
}

#[test]
fn test_local_check_over_matches_by_contract() {
    // Substring semantics: these look public but contain a loopback form
    assert!(is_local_address("127.0.0.10"));
    assert!(is_local_address("2001::1"));
}

#[test]
fn test_remote_address_consults_collaborator() {
    let info = track("8.8.8.8", CHROME_WINDOWS, &FixedLookup).unwrap();
    assert_eq!(info.location_data.city, "Mountain View");
}

#[test]
fn test_upstream_failure_propagates() {
    struct Failing;
    impl GeoLookup for Failing {
        fn locate(&self, _ip: &str) -> Result<LocationData, BoundaryError> {
            Err(BoundaryError::Upstream("connection refused".into()))
        }
    }

    let err = track("8.8.8.8", CHROME_WINDOWS, &Failing).unwrap_err();
    assert!(matches!(err, BoundaryError::Upstream(_)));
}

#[test]
fn test_device_info_chrome_on_windows() {
    let device = DeviceInfo::parse(CHROME_WINDOWS);

    assert_eq!(device.browser.as_deref(), Some("Chrome"));
    assert_eq!(device.os.as_deref(), Some("Windows"));
    assert_eq!(device.device_model, "Unknown Device");
}

#[test]
fn test_device_info_android_model() {
    let device = DeviceInfo::parse(ANDROID_PHONE);

    assert_eq!(device.browser.as_deref(), Some("Chrome"));
    assert_eq!(device.os.as_deref(), Some("Android"));
    assert_eq!(device.device_model, "Pixel 7");
}

#[test]
fn test_device_info_unrecognized_agent() {
    let device = DeviceInfo::parse("curl/8.4.0");

    assert!(device.browser.is_none());
    assert!(device.os.is_none());
    assert_eq!(device.device_model, "Unknown Device");
}

#[test]
fn test_tracking_json_field_names() {
    let info = track("::1", CHROME_WINDOWS, &NeverCalled).unwrap();
    let json = serde_json::to_value(&info).unwrap();

    assert!(json.get("userAgent").is_some());
    assert!(json.get("deviceModel").is_some());
    assert!(json.get("locationData").is_some());
    assert!(json["locationData"].get("regionName").is_some());
    assert!(json["locationData"].get("countryCode").is_some());
}
