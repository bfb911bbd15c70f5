//! Current-conditions panel for one weather snapshot.

#[cfg(test)]
#[path = "weather_panel_test.rs"]
mod weather_panel_test;

use leptos::prelude::*;

use crate::net::types::WeatherSnapshot;
use crate::util::format::{self, Compass};

const MISSING_TIME: &str = "--:--";

/// Display strings derived from a snapshot. Recomputed on every render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherView {
    pub location: String,
    pub coordinates: String,
    pub condition: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub temperature: String,
    pub feels_like: String,
    pub temp_min: String,
    pub temp_max: String,
    pub humidity: String,
    pub wind_speed: String,
    pub wind_direction: &'static str,
    pub gust: Option<String>,
    pub visibility: Option<String>,
    pub clouds: String,
    pub pressure: String,
    pub rain: Option<String>,
    pub snow: Option<String>,
    pub sunrise: String,
    pub sunset: String,
    pub observed_at: String,
}

impl WeatherView {
    pub fn from_snapshot(s: &WeatherSnapshot) -> Self {
        let condition = s.primary_condition();
        let location = match s.sys.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {country}", s.name),
            _ => s.name.clone(),
        };
        let at_location = |ts: i64| format::local_time(ts, s.timezone).unwrap_or_else(|| MISSING_TIME.to_owned());

        Self {
            location,
            coordinates: format!("{:.4}, {:.4}", s.coord.lat, s.coord.lon),
            condition: condition.map(|c| c.main.clone()).unwrap_or_default(),
            description: condition.map(|c| c.description.clone()).unwrap_or_default(),
            icon_url: condition.map(crate::net::types::Condition::icon_url),
            temperature: format::temperature(s.main.temp),
            feels_like: format::temperature(s.main.feels_like),
            temp_min: format::temperature(s.main.temp_min),
            temp_max: format::temperature(s.main.temp_max),
            humidity: format!("{}%", s.main.humidity),
            wind_speed: format!("{} m/s", s.wind.speed),
            wind_direction: Compass::from_degrees(s.wind.deg).abbreviation(),
            gust: s.wind.gust.map(|g| format!("gusts up to {g} m/s")),
            visibility: s.visibility.map(|m| format!("{} km", format::visibility_km(m))),
            clouds: format!("{}%", s.clouds.all),
            pressure: format!("{} mmHg", format::pressure_mmhg(s.main.pressure)),
            rain: s.rain.and_then(|r| r.last_hour).map(|mm| format!("{mm} mm/h")),
            snow: s.snow.and_then(|r| r.last_hour).map(|mm| format!("{mm} mm/h")),
            sunrise: at_location(s.sys.sunrise),
            sunset: at_location(s.sys.sunset),
            observed_at: at_location(s.dt),
        }
    }
}

/// Renders one snapshot: headline temperature plus a grid of stats.
#[component]
pub fn WeatherPanel(snapshot: WeatherSnapshot) -> impl IntoView {
    let v = WeatherView::from_snapshot(&snapshot);

    view! {
        <section class="weather-panel">
            <header class="weather-panel__header">
                <h2>{v.location}</h2>
                <span class="weather-panel__coords">{v.coordinates}</span>
                <span class="weather-panel__observed">"Updated " {v.observed_at}</span>
            </header>

            <div class="weather-panel__headline">
                {v.icon_url.map(|src| view! { <img class="weather-panel__icon" src=src alt=v.condition.clone()/> })}
                <span class="weather-panel__temp">{v.temperature}</span>
                <span class="weather-panel__description">{v.description}</span>
            </div>

            <dl class="weather-panel__grid">
                <Stat label="Feels like" value=v.feels_like/>
                <Stat label="Min" value=v.temp_min/>
                <Stat label="Max" value=v.temp_max/>
                <Stat label="Humidity" value=v.humidity/>
                <Stat label="Wind" value=format!("{} {}", v.wind_speed, v.wind_direction)/>
                {v.gust.map(|g| view! { <Stat label="Gusts" value=g/> })}
                {v.visibility.map(|km| view! { <Stat label="Visibility" value=km/> })}
                <Stat label="Cloud cover" value=v.clouds/>
                <Stat label="Pressure" value=v.pressure/>
                {v.rain.map(|mm| view! { <Stat label="Rain" value=mm/> })}
                {v.snow.map(|mm| view! { <Stat label="Snow" value=mm/> })}
                <Stat label="Sunrise" value=v.sunrise/>
                <Stat label="Sunset" value=v.sunset/>
            </dl>
        </section>
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="weather-panel__stat">
            <dt>{label}</dt>
            <dd>{value}</dd>
        </div>
    }
}
