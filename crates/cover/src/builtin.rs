//! The built-in license corpus.
//!
//! Template texts live under `licenses/` and are embedded at build time; the
//! URL table carries entries for licenses that are commonly identified by
//! link rather than by reproducing their text (the Creative Commons and GNU
//! families), plus the usual aliases for the embedded templates.

use once_cell::sync::Lazy;

use crate::checker::Checker;
use crate::types::License;

/// `(name, text, url)` for every built-in license. Either field may be empty;
/// a name may appear several times to register several URLs.
const BUILTIN: &[(&str, &str, &str)] = &[
    (
        "Apache-2.0",
        include_str!("../licenses/Apache-2.0.txt"),
        "www.apache.org/licenses/LICENSE-2.0",
    ),
    ("Apache-2.0", "", "opensource.org/licenses/Apache-2.0"),
    // The short per-file notice form; reported as Apache-2.0.
    ("Apache-2.0-User", include_str!("../licenses/Apache-2.0-User.txt"), ""),
    (
        "BSD-2-Clause",
        include_str!("../licenses/BSD-2-Clause.txt"),
        "opensource.org/licenses/BSD-2-Clause",
    ),
    (
        "BSD-3-Clause",
        include_str!("../licenses/BSD-3-Clause.txt"),
        "opensource.org/licenses/BSD-3-Clause",
    ),
    ("ISC", include_str!("../licenses/ISC.txt"), "opensource.org/licenses/ISC"),
    ("JSON", include_str!("../licenses/JSON.txt"), "www.json.org/license.html"),
    ("MIT", include_str!("../licenses/MIT.txt"), "opensource.org/licenses/MIT"),
    ("Unlicense", include_str!("../licenses/Unlicense.txt"), ""),
    ("Zlib", include_str!("../licenses/Zlib.txt"), "opensource.org/licenses/Zlib"),
    // URL-only entries.
    ("AGPL-3.0", "", "www.gnu.org/licenses/agpl-3.0.html"),
    ("GPL-2.0", "", "www.gnu.org/licenses/gpl-2.0.html"),
    ("GPL-3.0", "", "www.gnu.org/licenses/gpl-3.0.html"),
    ("LGPL-3.0", "", "www.gnu.org/licenses/lgpl-3.0.html"),
    ("CC-BY-4.0", "", "creativecommons.org/licenses/by/4.0"),
    ("CC-BY-SA-4.0", "", "creativecommons.org/licenses/by-sa/4.0"),
    ("CC0-1.0", "", "creativecommons.org/publicdomain/zero/1.0"),
];

static BUILTIN_CHECKER: Lazy<Checker> = Lazy::new(|| Checker::new(&builtin_licenses()));

/// The built-in license set as plain records.
pub fn builtin_licenses() -> Vec<License> {
    BUILTIN
        .iter()
        .map(|&(name, text, url)| License {
            name: name.to_string(),
            text: text.to_string(),
            url: url.to_string(),
        })
        .collect()
}

/// The checker compiled from the built-in corpus. Construction is pure and
/// happens once, on first use; the instance is shared for the life of the
/// process.
pub fn builtin() -> &'static Checker {
    &BUILTIN_CHECKER
}
