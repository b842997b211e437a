//! Environment variable lookup helpers.
//!
//! Every helper comes in two forms: a public one reading the process
//! environment, and a `*_from` twin taking an explicit lookup closure so
//! resolution logic can be tested without mutating process-wide state.
//! Empty values count as unset throughout.

use std::str::FromStr;

pub(crate) fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Read a variable, treating empty and whitespace-only values as unset.
pub fn optional_var(name: &str) -> Option<String> {
    optional_from(name, &process_env)
}

pub(crate) fn optional_from<F>(name: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

/// First set variable among `names`, in order.
pub fn first_of(names: &[&str]) -> Option<String> {
    first_of_from(names, &process_env)
}

pub(crate) fn first_of_from<F>(names: &[&str], lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names.iter().find_map(|name| optional_from(name, lookup))
}

/// Parse a variable. Unparseable values are logged and treated as unset
/// rather than surfaced as errors.
pub fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    parsed_from(name, &process_env)
}

pub(crate) fn parsed_from<T, F>(name: &str, lookup: &F) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = optional_from(name, lookup)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring unparseable value for {name}: {raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in<'a>(vars: &'a HashMap<&str, &str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| vars.get(name).map(|value| value.to_string())
    }

    #[test]
    fn test_optional_from_filters_empty() {
        let vars = HashMap::from([("SET", "value"), ("EMPTY", ""), ("BLANK", "   ")]);
        let lookup = lookup_in(&vars);

        assert_eq!(optional_from("SET", &lookup), Some("value".to_string()));
        assert_eq!(optional_from("EMPTY", &lookup), None);
        assert_eq!(optional_from("BLANK", &lookup), None);
        assert_eq!(optional_from("UNSET", &lookup), None);
    }

    #[test]
    fn test_first_of_from_order() {
        let vars = HashMap::from([("B", "second"), ("C", "third")]);
        let lookup = lookup_in(&vars);

        assert_eq!(
            first_of_from(&["A", "B", "C"], &lookup),
            Some("second".to_string())
        );
        assert_eq!(first_of_from(&["A"], &lookup), None);
    }

    #[test]
    fn test_first_of_from_skips_empty() {
        let vars = HashMap::from([("A", ""), ("B", "fallback")]);
        let lookup = lookup_in(&vars);

        assert_eq!(
            first_of_from(&["A", "B"], &lookup),
            Some("fallback".to_string())
        );
    }

    #[test]
    fn test_parsed_from() {
        let vars = HashMap::from([("PORT", "6379"), ("BAD", "not-a-number")]);
        let lookup = lookup_in(&vars);

        assert_eq!(parsed_from::<u16, _>("PORT", &lookup), Some(6379));
        assert_eq!(parsed_from::<u16, _>("BAD", &lookup), None);
        assert_eq!(parsed_from::<u16, _>("UNSET", &lookup), None);
    }

    #[test]
    fn test_optional_var_reads_process_env() {
        std::env::set_var("SUPERSET_CONFIG_ENV_HELPER_TEST", "present");
        assert_eq!(
            optional_var("SUPERSET_CONFIG_ENV_HELPER_TEST"),
            Some("present".to_string())
        );
        std::env::remove_var("SUPERSET_CONFIG_ENV_HELPER_TEST");
        assert_eq!(optional_var("SUPERSET_CONFIG_ENV_HELPER_TEST"), None);
    }

    #[test]
    fn test_first_of_reads_process_env() {
        std::env::set_var("SUPERSET_CONFIG_FIRST_OF_TEST_B", "fallback");
        assert_eq!(
            first_of(&[
                "SUPERSET_CONFIG_FIRST_OF_TEST_A",
                "SUPERSET_CONFIG_FIRST_OF_TEST_B",
            ]),
            Some("fallback".to_string())
        );

        std::env::set_var("SUPERSET_CONFIG_FIRST_OF_TEST_A", "first");
        assert_eq!(
            first_of(&[
                "SUPERSET_CONFIG_FIRST_OF_TEST_A",
                "SUPERSET_CONFIG_FIRST_OF_TEST_B",
            ]),
            Some("first".to_string())
        );

        std::env::remove_var("SUPERSET_CONFIG_FIRST_OF_TEST_A");
        std::env::remove_var("SUPERSET_CONFIG_FIRST_OF_TEST_B");
        assert_eq!(
            first_of(&[
                "SUPERSET_CONFIG_FIRST_OF_TEST_A",
                "SUPERSET_CONFIG_FIRST_OF_TEST_B",
            ]),
            None
        );
    }

    #[test]
    fn test_parsed_var_reads_process_env() {
        std::env::set_var("SUPERSET_CONFIG_PARSED_VAR_TEST", "42");
        assert_eq!(parsed_var::<u64>("SUPERSET_CONFIG_PARSED_VAR_TEST"), Some(42));

        std::env::set_var("SUPERSET_CONFIG_PARSED_VAR_TEST", "not-a-number");
        assert_eq!(parsed_var::<u64>("SUPERSET_CONFIG_PARSED_VAR_TEST"), None);

        std::env::remove_var("SUPERSET_CONFIG_PARSED_VAR_TEST");
        assert_eq!(parsed_var::<u64>("SUPERSET_CONFIG_PARSED_VAR_TEST"), None);
    }
}
