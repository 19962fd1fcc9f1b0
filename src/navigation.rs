//! Hand-off to an external map application for directions to a station.

use crate::Error;
use url::Url;

const IOS_DEVICES: [&str; 3] = ["iPad", "iPhone", "iPod"];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Platform {
    Ios,
    Other,
}

impl Platform {
    pub fn from_user_agent(user_agent: &str) -> Platform {
        if IOS_DEVICES.iter().any(|d| user_agent.contains(d)) {
            Platform::Ios
        } else {
            Platform::Other
        }
    }
}

/// Where the URL should be opened.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OpenIn {
    CurrentContext,
    NewContext,
}

#[derive(Debug, PartialEq, Clone)]
pub struct NavigationAction {
    pub url: Url,
    pub open_in: OpenIn,
}

/// Both providers, for callers that let an iOS user pick one.
#[derive(Debug, PartialEq, Clone)]
pub struct NavigationChoice {
    pub google: NavigationAction,
    pub apple: NavigationAction,
}

pub fn google_maps_url(latitude: f64, longitude: f64) -> Result<Url, Error> {
    parse(format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        latitude, longitude
    ))
}

pub fn apple_maps_url(latitude: f64, longitude: f64) -> Result<Url, Error> {
    parse(format!("maps://maps.apple.com/?daddr={},{}", latitude, longitude))
}

pub fn choices(latitude: f64, longitude: f64) -> Result<NavigationChoice, Error> {
    Ok(NavigationChoice {
        google: NavigationAction {
            url: google_maps_url(latitude, longitude)?,
            open_in: OpenIn::CurrentContext,
        },
        apple: NavigationAction {
            url: apple_maps_url(latitude, longitude)?,
            open_in: OpenIn::CurrentContext,
        },
    })
}

/// Directions for a platform that does not ask: native scheme on iOS, web directions elsewhere.
pub fn navigate_to(
    latitude: f64,
    longitude: f64,
    platform: Platform,
) -> Result<NavigationAction, Error> {
    match platform {
        Platform::Ios => Ok(NavigationAction {
            url: apple_maps_url(latitude, longitude)?,
            open_in: OpenIn::CurrentContext,
        }),
        Platform::Other => Ok(NavigationAction {
            url: google_maps_url(latitude, longitude)?,
            open_in: OpenIn::NewContext,
        }),
    }
}

fn parse(url: String) -> Result<Url, Error> {
    match Url::parse(&url) {
        Ok(u) => Ok(u),
        Err(err) => Err(Error::InvalidUrl {
            url,
            reason: err.to_string(),
        }),
    }
}
