/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer an iterative solver without
/// changing its API, enabling logging, early stopping, or custom control
/// policies.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Stop;

    fn drive<O: Observer<usize, Stop>>(mut observer: O, events: usize) -> usize {
        for event in 0..events {
            if observer.observe(&event).is_some() {
                return event;
            }
        }
        events
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 5), 5);
    }

    #[test]
    fn closure_observer_can_stop() {
        let mut seen = 0;
        let stopped_at = drive(
            |event: &usize| {
                seen += 1;
                (*event == 2).then_some(Stop)
            },
            5,
        );

        assert_eq!(stopped_at, 2);
        assert_eq!(seen, 3);
    }
}
