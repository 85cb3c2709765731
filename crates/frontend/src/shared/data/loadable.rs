use super::DataError;

/// State of one asynchronous load as the UI sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, DataError>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A `Loadable` guarded by a generation counter.
///
/// Every `begin` hands out a new generation; `finish` accepts a result only
/// for the latest one, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackedLoad<T> {
    value: Loadable<T>,
    generation: u64,
}

impl<T> TrackedLoad<T> {
    pub fn value(&self) -> &Loadable<T> {
        &self.value
    }

    /// Start a new load. Already loaded data stays visible until the
    /// replacement arrives.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        if self.value.loaded().is_none() {
            self.value = Loadable::Loading;
        }
        self.generation
    }

    /// Store the result of load `generation`. Returns `false` if it is stale.
    pub fn finish(&mut self, generation: u64, result: Result<T, DataError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.value = Loadable::from_result(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        assert_eq!(Loadable::from_result(Ok(3)), Loadable::Loaded(3));
        let failed: Loadable<i32> =
            Loadable::from_result(Err(DataError::NotFound("R1".to_string())));
        assert_eq!(failed.error(), Some("registry 'R1' not found"));
        assert!(failed.loaded().is_none());
    }

    #[test]
    fn test_tracked_load_discards_stale_result() {
        let mut load = TrackedLoad::<Vec<u32>>::default();
        let first = load.begin();
        assert!(load.value().is_loading());

        let second = load.begin();
        assert!(!load.finish(first, Ok(vec![1])));
        assert!(load.value().is_loading());

        assert!(load.finish(second, Ok(vec![2])));
        assert_eq!(load.value(), &Loadable::Loaded(vec![2]));
    }

    #[test]
    fn test_tracked_load_keeps_data_while_reloading() {
        let mut load = TrackedLoad::<Vec<u32>>::default();
        let generation = load.begin();
        load.finish(generation, Ok(vec![1, 2]));

        load.begin();
        assert_eq!(load.value(), &Loadable::Loaded(vec![1, 2]));
    }

    #[test]
    fn test_tracked_load_failure_replaces_loading() {
        let mut load = TrackedLoad::<Vec<u32>>::default();
        let generation = load.begin();
        assert!(load.finish(
            generation,
            Err(DataError::Unavailable("offline".to_string()))
        ));
        assert_eq!(load.value().error(), Some("data source unavailable: offline"));
    }
}
