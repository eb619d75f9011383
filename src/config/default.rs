// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example configuration written by `conlint init`.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# conlint configuration
#
# Severity: "disabled", "warning", "error" (or 0, 1, 2).
# when:     "always" (default) or "never".

[type-enum]
severity = "error"
when = "always"
allowedTypes = ["feature", "feat", "fix", "chore", "docs", "style", "refactor"]
caseSensitive = true

# Styles: lower-case, upper-case, camel-case, kebab-case, pascal-case,
# sentence-case, snake-case, start-case.
[subject-case]
severity = "disabled"
when = "never"
allowedStyles = []
exceptions = []
"#
}
