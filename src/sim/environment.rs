//! Environment rotation and location names
//!
//! Environments rotate on a tick timer. Within an environment the displayed
//! location name rotates every `location_change_distance` kilometers.

use super::state::{EnvironmentKind, GameState};

const CITY: [&str; 5] = ["Shinjuku", "Shibuya", "Minato", "Chiyoda", "Chuo"];
const MOUNTAIN: [&str; 5] = [
    "Mount Fuji",
    "Mount Takao",
    "Mount Tsukuba",
    "Mount Hakone",
    "Mount Tanzawa",
];
const SEA: [&str; 5] = [
    "Shonan Coast",
    "Enoshima",
    "Kamakura Coast",
    "Zushi Coast",
    "Hayama Coast",
];
const FOREST: [&str; 5] = ["Okutama", "Mount Takao", "Tama River", "Ome", "Hachioji"];

/// Location names shown while driving through `kind`
pub fn location_names(kind: EnvironmentKind) -> &'static [&'static str] {
    match kind {
        EnvironmentKind::City => &CITY,
        EnvironmentKind::Mountain => &MOUNTAIN,
        EnvironmentKind::Sea => &SEA,
        EnvironmentKind::Forest => &FOREST,
    }
}

/// Name at `index`, wrapping around the list
pub fn location_name(kind: EnvironmentKind, index: usize) -> &'static str {
    let names = location_names(kind);
    names[index % names.len()]
}

/// Name for the state's current environment and location index
pub fn current_location(state: &GameState) -> &'static str {
    location_name(state.environment, state.location_index)
}

/// Count one tick toward the next environment.
///
/// When the timer reaches `interval` it resets, the environment moves to the next
/// kind and the location index starts over. Returns `(from, to)` on a change.
pub fn advance_environment(
    state: &mut GameState,
    interval: u32,
) -> Option<(EnvironmentKind, EnvironmentKind)> {
    state.environment_timer += 1;
    if state.environment_timer < interval {
        return None;
    }

    let from = state.environment;
    state.environment_timer = 0;
    state.environment = from.next();
    state.location_index = 0;
    Some((from, state.environment))
}

/// Rotate the location name once enough distance has been covered since the
/// last rotation. Returns true if the name changed.
pub fn advance_location(state: &mut GameState, change_distance_km: f64) -> bool {
    let distance_km = state.distance_km();
    if distance_km - state.last_location_change_km < change_distance_km {
        return false;
    }

    state.last_location_change_km = distance_km;
    state.location_index = (state.location_index + 1) % location_names(state.environment).len();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_names() {
        for kind in EnvironmentKind::ALL {
            assert_eq!(location_names(kind).len(), 5);
        }
        assert_eq!(location_name(EnvironmentKind::Sea, 1), "Enoshima");
        assert_eq!(location_name(EnvironmentKind::City, 6), "Shibuya");
    }

    #[test]
    fn test_environment_changes_on_interval() {
        let mut state = GameState::new(50.0);
        state.location_index = 3;

        for _ in 0..9 {
            assert_eq!(advance_environment(&mut state, 10), None);
        }
        assert_eq!(state.environment_timer, 9);
        assert_eq!(
            advance_environment(&mut state, 10),
            Some((EnvironmentKind::City, EnvironmentKind::Mountain))
        );
        assert_eq!(state.environment_timer, 0);
        assert_eq!(state.location_index, 0);
    }

    #[test]
    fn test_environment_wraps_to_city() {
        let mut state = GameState::new(50.0);
        let mut order = Vec::new();
        for _ in 0..4 {
            let (_, to) = advance_environment(&mut state, 1).unwrap();
            order.push(to);
        }
        assert_eq!(
            order,
            vec![
                EnvironmentKind::Mountain,
                EnvironmentKind::Sea,
                EnvironmentKind::Forest,
                EnvironmentKind::City,
            ]
        );
    }

    #[test]
    fn test_location_rotates_by_distance() {
        let mut state = GameState::new(50.0);
        state.distance = 499.0;
        assert!(!advance_location(&mut state, 0.5));
        assert_eq!(state.location_index, 0);

        state.distance = 500.0;
        assert!(advance_location(&mut state, 0.5));
        assert_eq!(state.location_index, 1);
        assert_eq!(state.last_location_change_km, 0.5);
        assert_eq!(current_location(&state), "Shibuya");

        // Needs another full interval from the last change
        state.distance = 900.0;
        assert!(!advance_location(&mut state, 0.5));
    }

    #[test]
    fn test_location_index_wraps() {
        let mut state = GameState::new(50.0);
        for i in 1..=5 {
            state.distance = i as f64 * 1000.0;
            assert!(advance_location(&mut state, 1.0));
        }
        assert_eq!(state.location_index, 0);
    }
}
