//! Surface-neutral result of a controller decision.

/// What a controller entrypoint decided, before it is translated into a
/// view result or an HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Present the data
    Ok(T),
    /// Go back to the list
    Redirect,
    /// The identifier did not resolve to an entity
    NotFound,
    /// The route identifier and the payload disagree
    BadRequest,
    /// A new entity was stored under `id`
    Created { id: i32, value: T },
    /// A mutation succeeded with nothing to show
    NoContent,
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Created { id, value } => Outcome::Created {
                id,
                value: f(value),
            },
            Outcome::Redirect => Outcome::Redirect,
            Outcome::NotFound => Outcome::NotFound,
            Outcome::BadRequest => Outcome::BadRequest,
            Outcome::NoContent => Outcome::NoContent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_variant() {
        assert_eq!(Outcome::Ok(2).map(|v| v * 10), Outcome::Ok(20));
        assert_eq!(
            Outcome::Created { id: 4, value: "a" }.map(str::len),
            Outcome::Created { id: 4, value: 1 }
        );
        assert_eq!(Outcome::<i32>::NotFound.map(|v| v + 1), Outcome::NotFound);
        assert_eq!(Outcome::<i32>::NoContent.map(|v| v + 1), Outcome::NoContent);
    }
}
