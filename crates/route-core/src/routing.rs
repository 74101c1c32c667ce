//! Route link helpers.
//!
//! A directions link holds an origin, a destination and up to eight
//! waypoints, so longer trips are split into overlapping groups where the
//! destination of one group is the origin of the next.

use crate::models::Place;

/// Base of every generated directions link
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Separator between waypoint addresses
pub const WAYPOINT_SEPARATOR: &str = "|";

/// Split `places` into groups of at most `group_size` elements, advancing the
/// start by `group_size - 1` so consecutive groups share one element.
///
/// Fewer than two places yield no groups. The final group may be shorter
/// than `group_size`, down to a single trailing element.
///
/// ```
/// # use route_core::routing::chunk;
/// let items = [1, 2, 3, 4, 5];
/// let groups = chunk(&items, 3);
/// assert_eq!(groups, vec![&[1, 2, 3][..], &[3, 4, 5][..], &[5][..]]);
/// ```
pub fn chunk<T>(places: &[T], group_size: usize) -> Vec<&[T]> {
    if places.len() < 2 || group_size < 2 {
        return Vec::new();
    }

    let step = group_size - 1;
    (0..places.len())
        .step_by(step)
        .map(|start| &places[start..(start + group_size).min(places.len())])
        .collect()
}

/// Build the directions link for one group.
///
/// The first address is the origin, the last the destination and everything
/// in between becomes a waypoint. Addresses are inserted as-is, without
/// percent-encoding.
///
/// ```
/// # use route_core::{routing::directions_url, Place};
/// let group = [Place::new("a", "A"), Place::new("b", "B"), Place::new("c", "C")];
/// assert_eq!(
///     directions_url(&group).unwrap(),
///     "https://www.google.com/maps/dir/?api=1&origin=A&destination=C&waypoints=B"
/// );
/// ```
pub fn directions_url(group: &[Place]) -> Option<String> {
    let origin = group.first()?;
    let destination = group.last()?;

    let mut url = format!(
        "{}&origin={}&destination={}",
        DIRECTIONS_BASE_URL, origin.formatted_address, destination.formatted_address
    );

    if group.len() > 2 {
        let waypoints: Vec<&str> = group[1..group.len() - 1]
            .iter()
            .map(|p| p.formatted_address.as_str())
            .collect();
        let waypoints = waypoints.join(WAYPOINT_SEPARATOR);
        if !waypoints.is_empty() {
            url.push_str("&waypoints=");
            url.push_str(&waypoints);
        }
    }

    Some(url)
}

/// Generate one directions link per group of `places`.
///
/// Returns an empty list for fewer than two places.
pub fn route_urls(places: &[Place], group_size: usize) -> Vec<String> {
    if places.len() < 2 {
        return Vec::new();
    }

    chunk(places, group_size)
        .into_iter()
        .filter_map(directions_url)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn places(n: usize) -> Vec<Place> {
        (0..n)
            .map(|i| Place::new(format!("id{}", i), format!("Addr {}", i)))
            .collect()
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(9, 1)]
    #[case(10, 2)]
    #[case(11, 2)]
    #[case(12, 2)]
    #[case(19, 3)]
    #[case(28, 4)]
    fn chunk_count(#[case] len: usize, #[case] expected: usize) {
        let items: Vec<usize> = (0..len).collect();
        assert_eq!(chunk(&items, 10).len(), expected);
    }

    #[test]
    fn chunk_groups_overlap_by_one() {
        let items: Vec<usize> = (0..40).collect();
        let groups = chunk(&items, 10);
        for pair in groups.windows(2) {
            assert_eq!(pair[0].last(), pair[1].first());
        }
        assert!(groups.iter().all(|g| g.len() <= 10));
    }

    #[test]
    fn chunk_twelve_places() {
        let items: Vec<usize> = (0..12).collect();
        let groups = chunk(&items, 10);
        assert_eq!(groups[0], &items[0..10]);
        assert_eq!(groups[1], &items[9..12]);
    }

    #[test]
    fn chunk_exact_group_leaves_trailing_single() {
        let items: Vec<usize> = (0..10).collect();
        let groups = chunk(&items, 10);
        assert_eq!(groups, vec![&items[0..10], &items[9..10]]);
    }

    #[test]
    fn url_two_places_has_no_waypoints() {
        let group = [Place::new("b", "Addr B"), Place::new("a", "Addr A")];
        assert_eq!(
            directions_url(&group).unwrap(),
            "https://www.google.com/maps/dir/?api=1&origin=Addr B&destination=Addr A"
        );
    }

    #[test]
    fn url_single_place_group() {
        let group = [Place::new("a", "Only")];
        assert_eq!(
            directions_url(&group).unwrap(),
            "https://www.google.com/maps/dir/?api=1&origin=Only&destination=Only"
        );
    }

    #[test]
    fn url_empty_group() {
        assert_eq!(directions_url(&[]), None);
    }

    #[test]
    fn url_waypoints_in_order() {
        let group = places(5);
        assert_eq!(
            directions_url(&group).unwrap(),
            "https://www.google.com/maps/dir/?api=1&origin=Addr 0&destination=Addr 4\
             &waypoints=Addr 1|Addr 2|Addr 3"
        );
    }

    #[test]
    fn url_addresses_not_escaped() {
        let group = [Place::new("a", "A & B #1"), Place::new("b", "C?d")];
        assert_eq!(
            directions_url(&group).unwrap(),
            "https://www.google.com/maps/dir/?api=1&origin=A & B #1&destination=C?d"
        );
    }

    #[test]
    fn route_urls_match_chunk_count() {
        for n in 0..30 {
            let input = places(n);
            let expected = if n < 2 { 0 } else { chunk(&input, 10).len() };
            assert_eq!(route_urls(&input, 10).len(), expected, "n = {}", n);
        }
    }

    #[test]
    fn route_urls_chain_destinations() {
        let urls = route_urls(&places(12), 10);
        assert_eq!(urls.len(), 2);
        assert!(urls[0].contains("&origin=Addr 0&destination=Addr 9&"));
        assert_eq!(
            urls[1],
            "https://www.google.com/maps/dir/?api=1&origin=Addr 9&destination=Addr 11\
             &waypoints=Addr 10"
        );
    }
}
