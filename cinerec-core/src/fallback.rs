//! Static movies shown when a recommendation request fails.

use crate::types::Movie;

/// The fixed three-movie fallback list, in display order.
pub fn fallback_movies() -> Vec<Movie> {
    vec![
        Movie::new(
            "Inception",
            "Sci-Fi",
            "A mind-bending thriller about dream-sharing technology.",
            2010,
        ),
        Movie::new(
            "The Dark Knight",
            "Action",
            "Batman faces the Joker in this epic superhero film.",
            2008,
        ),
        Movie::new(
            "Parasite",
            "Thriller",
            "A poor family schemes to become employed by a wealthy family.",
            2019,
        ),
    ]
}
