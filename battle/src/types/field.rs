//! Global field state

use std::collections::HashSet;

use scout_protocol::to_id;

use super::conditions::{FieldEffect, Terrain, Weather};

/// Weather, terrain and whole-field effects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    pub effects: HashSet<FieldEffect>,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has(&self, effect: FieldEffect) -> bool {
        self.effects.contains(&effect)
    }

    /// Apply a `-weather` value. "none" clears the weather. Returns false for
    /// an unrecognized weather, which leaves the field unchanged.
    pub fn apply_weather(&mut self, weather: &str) -> bool {
        if to_id(weather) == "none" {
            self.weather = None;
            return true;
        }
        let Some(known) = Weather::from_protocol(weather) else {
            return false;
        };
        self.weather = Some(known);
        true
    }

    /// Apply a `-fieldstart` condition. Returns false if it is not tracked.
    pub fn apply_field_start(&mut self, condition: &str) -> bool {
        if let Some(terrain) = Terrain::from_protocol(condition) {
            self.terrain = Some(terrain);
            return true;
        }
        let Some(effect) = FieldEffect::from_protocol(condition) else {
            return false;
        };
        self.effects.insert(effect);
        true
    }

    /// Apply a `-fieldend` condition. Returns false if it is not tracked.
    /// Ending a terrain other than the current one changes nothing.
    pub fn apply_field_end(&mut self, condition: &str) -> bool {
        if let Some(terrain) = Terrain::from_protocol(condition) {
            if self.terrain == Some(terrain) {
                self.terrain = None;
            }
            return true;
        }
        let Some(effect) = FieldEffect::from_protocol(condition) else {
            return false;
        };
        self.effects.remove(&effect);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.weather.is_none() && self.terrain.is_none() && self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        assert!(FieldState::new().is_empty());
    }

    #[test]
    fn test_apply_weather() {
        let mut field = FieldState::new();
        assert!(field.apply_weather("RainDance"));
        assert_eq!(field.weather, Some(Weather::Rain));

        assert!(field.apply_weather("none"));
        assert!(field.weather.is_none());

        field.weather = Some(Weather::Sand);
        assert!(!field.apply_weather("Fog"));
        assert_eq!(field.weather, Some(Weather::Sand));
    }

    #[test]
    fn test_terrain_replaces_terrain() {
        let mut field = FieldState::new();
        assert!(field.apply_field_start("Electric Terrain"));
        assert!(field.apply_field_start("move: Grassy Terrain"));
        assert_eq!(field.terrain, Some(Terrain::Grassy));

        // A stale end for the replaced terrain
        assert!(field.apply_field_end("move: Electric Terrain"));
        assert_eq!(field.terrain, Some(Terrain::Grassy));
    }

    #[test]
    fn test_field_effects_toggle() {
        let mut field = FieldState::new();
        assert!(field.apply_field_start("move: Trick Room"));
        assert!(field.apply_field_start("Gravity"));
        assert!(field.has(FieldEffect::TrickRoom));
        assert!(field.has(FieldEffect::Gravity));
        assert!(!field.apply_field_start("move: Mystery Room"));

        field.apply_field_end("move: Trick Room");
        field.apply_field_end("move: Gravity");
        assert!(field.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut field = FieldState::new();
        field.apply_weather("SunnyDay");
        field.apply_field_start("move: Magic Room");
        field.clear();
        assert!(field.is_empty());
    }
}
