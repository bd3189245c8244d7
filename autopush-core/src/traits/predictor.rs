/// Source of push candidates for a primary request.
pub trait IPushPredictor: Send + Sync {
    /// Ranked assets to push after serving `path`, most confident first.
    /// Empty when nothing qualifies.
    fn get_assets_for_path(&self, path: &str) -> Vec<String>;
}
