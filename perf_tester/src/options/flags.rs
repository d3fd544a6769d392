//!
//! The option flag formatting.
//!

use super::Options;

///
/// Renders the native runtime flags as `-D<name>=<value>` tokens.
///
/// The tokens are passed to the JVM through the submit environment.
///
pub fn runtime_flags(options: &Options) -> Vec<String> {
    options
        .iter()
        .map(|(name, value)| format!("-D{name}={value}"))
        .collect()
}

///
/// Renders the application flags as `--<name>=<value>` tokens.
///
/// The tokens are appended to the submit command after the application.
///
pub fn app_flags(options: &Options) -> Vec<String> {
    options
        .iter()
        .map(|(name, value)| format!("--{name}={value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::options::Options;
    use crate::value::Value;

    fn options() -> Options {
        vec![
            ("spark.executor.memory".to_owned(), Value::from("4g")),
            ("spark.shuffle.compress".to_owned(), Value::Boolean(true)),
            ("spark.locality.wait".to_owned(), Value::Integer(3000)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn runtime() {
        assert_eq!(
            super::runtime_flags(&options()),
            vec![
                "-Dspark.executor.memory=4g",
                "-Dspark.shuffle.compress=true",
                "-Dspark.locality.wait=3000",
            ]
        );
    }

    #[test]
    fn app() {
        let options: Options = vec![
            ("num-trials".to_owned(), Value::Integer(10)),
            ("random-seed".to_owned(), Value::Integer(5)),
            ("persistent-type".to_owned(), Value::from("memory")),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            super::app_flags(&options),
            vec!["--num-trials=10", "--random-seed=5", "--persistent-type=memory"]
        );
    }

    #[test]
    fn stable_across_calls() {
        let options = options();
        assert_eq!(
            super::runtime_flags(&options),
            super::runtime_flags(&options)
        );
        assert_eq!(super::app_flags(&options), super::app_flags(&options));
    }

    #[test]
    fn empty() {
        assert!(super::runtime_flags(&Options::default()).is_empty());
        assert!(super::app_flags(&Options::default()).is_empty());
    }
}
