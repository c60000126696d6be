//! Template-response generators.
//!
//! Each generator is a pure function of an injected random source, the
//! request payload and the current time. The HTTP layer in `crate::server`
//! only decodes the payload and wraps the result.

pub mod chat;
pub mod recipe;
pub mod workout;

use rand::Rng;

pub use chat::{generate_chat_reply, ChatRequest, ChatResponse};
pub use recipe::{generate_recipe, RecipeRequest, RecipeResponse};
pub use workout::{generate_workout, local_personalized_workout, WorkoutRequest, WorkoutResponse};

/// Pick a uniformly random index below `len`.
///
/// Returns `None` for an empty range.
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.gen_range(0..len))
    }
}

/// Pick a uniformly random element of a slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    pick_index(rng, items.len()).map(|i| &items[i])
}
