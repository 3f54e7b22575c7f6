use crate::app::history::HistoryStore;
use crate::app::session::Session;
use crate::domain::Config;
use crate::ports::KeyValueStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<K: KeyValueStore> {
    config: Config,
    session: Session<K>,
}

impl<K: KeyValueStore> AppContext<K> {
    /// Create a context, loading history from `store`.
    pub fn new(config: Config, store: K) -> Self {
        let session = Session::new(HistoryStore::load(store));
        Self { config, session }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session<K> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<K> {
        &mut self.session
    }
}
