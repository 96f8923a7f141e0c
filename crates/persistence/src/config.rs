// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Output settings for the JSON store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStoreConfig {
    /// Spaces per indentation level in written JSON.
    pub indent: usize,
    /// Whether written JSON files end with a newline.
    pub trailing_newline: bool,
    /// Whether missing parent directories are created on write.
    pub create_parent_dirs: bool,
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            trailing_newline: true,
            create_parent_dirs: false,
        }
    }
}
