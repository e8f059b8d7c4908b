//! Conversion state threaded through the recursive walk.

use crate::components::ComponentRegistry;
use crate::config::{ConvertOptions, Direction};
use crate::error::ConvertError;
use crate::schema_utils::build_path;

/// Call-path-scoped state for one top-level conversion.
///
/// Passed by `&mut` through every converter. `forced_input` is only ever
/// raised (never cleared) during a walk, and only while `direction` is
/// [`Direction::Input`].
pub struct SchemaState<'a> {
    /// Which side of type-changing validators the walk renders.
    pub direction: Direction,
    /// Set when an effect or pipeline along the walk resolved to its input
    /// side during an input walk.
    pub forced_input: bool,
    /// JSON Pointer of the node being emitted (e.g. `#/properties/name`).
    pub path: String,
    /// Current nesting depth.
    pub depth: usize,
    pub(crate) components: &'a mut ComponentRegistry,
    pub(crate) options: &'a ConvertOptions,
}

impl<'a> SchemaState<'a> {
    pub fn new(
        direction: Direction,
        components: &'a mut ComponentRegistry,
        options: &'a ConvertOptions,
    ) -> Self {
        Self {
            direction,
            forced_input: false,
            path: "#".to_string(),
            depth: 0,
            components,
            options,
        }
    }

    /// Run `f` one level deeper, at `path/segments...`.
    pub(crate) fn descend<T>(
        &mut self,
        segments: &[&str],
        f: impl FnOnce(&mut Self) -> Result<T, ConvertError>,
    ) -> Result<T, ConvertError> {
        let child_path = build_path(&self.path, segments);
        let parent_path = std::mem::replace(&mut self.path, child_path);
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        self.path = parent_path;
        result
    }

    /// Run `f` one level deeper at the same path, for wrappers that render
    /// their inner validator in place.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ConvertError>,
    ) -> Result<T, ConvertError> {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Run `f` at `path` with a fresh `forced_input` flag and report the flag
    /// it ended with. The flag still propagates to the caller afterwards.
    pub(crate) fn isolated<T>(
        &mut self,
        path: String,
        f: impl FnOnce(&mut Self) -> Result<T, ConvertError>,
    ) -> Result<(T, bool), ConvertError> {
        let parent_path = std::mem::replace(&mut self.path, path);
        let parent_forced = std::mem::replace(&mut self.forced_input, false);
        let result = f(self);
        let forced = self.forced_input;
        self.path = parent_path;
        self.forced_input = parent_forced || forced;
        result.map(|value| (value, forced))
    }
}
