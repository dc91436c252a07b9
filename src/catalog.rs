//! Known official sample repositories.
//!
//! These lists seed discovery so a run always has work to do, even when the
//! vendor sites are unreachable or their markup changes. They are built once
//! on first use and never mutated.

use crate::models::{AndroidProject, AppleProject};
use crate::utils::conventional_archive_url;
use once_cell::sync::Lazy;

const ANDROID_REPOS: [(&str, &str, &str); 10] = [
    (
        "platform-samples",
        "https://github.com/android/platform-samples",
        "A collection of Android platform samples for Android development",
    ),
    (
        "ai-samples",
        "https://github.com/android/ai-samples",
        "AI and machine learning samples for Android",
    ),
    (
        "location-samples",
        "https://github.com/android/location-samples",
        "Location and maps samples for Android",
    ),
    (
        "input-samples",
        "https://github.com/android/input-samples",
        "Input method and text handling samples for Android",
    ),
    (
        "security-samples",
        "https://github.com/android/security-samples",
        "Security best practices samples for Android",
    ),
    (
        "identity-samples",
        "https://github.com/android/identity-samples",
        "Identity and authentication samples for Android",
    ),
    (
        "large-screen-samples",
        "https://github.com/android/large-screen-samples",
        "Large screen and foldable device samples for Android",
    ),
    (
        "tv-samples",
        "https://github.com/android/tv-samples",
        "Android TV and Google TV samples",
    ),
    (
        "car-samples",
        "https://github.com/android/car-samples",
        "Android Auto and automotive samples",
    ),
    (
        "play-billing-samples",
        "https://github.com/android/play-billing-samples",
        "Samples for Google Play Billing",
    ),
];

const APPLE_REPOS: [(&str, &str); 11] = [
    ("Swift-OpenAPI-Generator", "https://github.com/apple/swift-openapi-generator"),
    ("Swift-Testing", "https://github.com/apple/swift-testing"),
    ("Swift-Foundation", "https://github.com/apple/swift-foundation"),
    ("Swift-Crypto", "https://github.com/apple/swift-crypto"),
    ("Swift-Numerics", "https://github.com/apple/swift-numerics"),
    ("Swift-System", "https://github.com/apple/swift-system"),
    ("Swift-Docker", "https://github.com/apple/swift-docker"),
    ("Swift-Certificates", "https://github.com/apple/swift-certificates"),
    ("Swift-HTTP-Types", "https://github.com/apple/swift-http-types"),
    ("Swift-Service-Lifecycle", "https://github.com/apple/swift-service-lifecycle"),
    ("Swift-Metrics", "https://github.com/apple/swift-metrics"),
];

pub static KNOWN_ANDROID_REPOS: Lazy<Vec<AndroidProject>> = Lazy::new(|| {
    ANDROID_REPOS
        .iter()
        .map(|(name, url, description)| AndroidProject {
            name: name.to_string(),
            source_url: url.to_string(),
            description: description.to_string(),
        })
        .collect()
});

/// Apple repositories, each paired with its `main` branch archive.
pub static KNOWN_APPLE_REPOS: Lazy<Vec<AppleProject>> = Lazy::new(|| {
    APPLE_REPOS
        .iter()
        .map(|(name, url)| AppleProject {
            name: name.to_string(),
            detail_url: url.to_string(),
            download_url: Some(conventional_archive_url(url)),
        })
        .collect()
});
