//! Everything that lives on screen, one state machine per activity.

pub mod clock;
pub mod debris;
pub mod explosion;
pub mod game_over;
pub mod projectile;
pub mod spaceship;
pub mod sparkle;

pub use clock::{StatusLine, WorldClock};
pub use debris::{DebrisFall, DebrisSpawner, FallPhase};
pub use explosion::Explosion;
pub use game_over::GameOver;
pub use projectile::Projectile;
pub use spaceship::Spaceship;
pub use sparkle::Sparkle;
