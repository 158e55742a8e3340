//! Timeline - how the game escalates as the years go by.
//!
//! | From year | Debris every N ticks |
//! |-----------|----------------------|
//! | < 1961 | no debris |
//! | 1961 | 20 |
//! | 1969 | 16 |
//! | 1981 | 14 |
//! | 1998 | 10 |
//! | 2011 | 8 |
//! | 2020 | 6 |
//! | 2040+ | 4 |

/// `(first year, delay in ticks)`, ascending by year.
const SPAWN_DELAYS: [(u32, u32); 7] = [
    (1961, 20),
    (1969, 16),
    (1981, 14),
    (1998, 10),
    (2011, 8),
    (2020, 6),
    (2040, 4),
];

/// Milestones shown next to the year on the status line.
const PHRASES: [(u32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Ticks between two debris spawns, or `None` before debris starts falling.
///
/// ```
/// use tui_starfield_core::spawn_delay;
///
/// assert_eq!(spawn_delay(1957), None);
/// assert_eq!(spawn_delay(1961), Some(20));
/// assert_eq!(spawn_delay(3000), Some(4));
/// ```
pub fn spawn_delay(year: u32) -> Option<u32> {
    SPAWN_DELAYS
        .iter()
        .rev()
        .find(|(from, _)| year >= *from)
        .map(|&(_, delay)| delay)
}

/// Latest milestone at or before `year`.
pub fn phrase(year: u32) -> Option<&'static str> {
    PHRASES
        .iter()
        .rev()
        .find(|(from, _)| year >= *from)
        .map(|&(_, text)| text)
}

/// Is `year` exactly a milestone year?
pub fn is_milestone(year: u32) -> bool {
    PHRASES.iter().any(|&(from, _)| from == year)
}
