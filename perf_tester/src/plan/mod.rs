//!
//! The test plan.
//!

pub mod invocation;

use std::collections::HashSet;
use std::sync::Arc;

use itertools::Itertools;

use crate::error::Error;
use crate::option_set::OptionSet;
use crate::options::Options;
use crate::suite::Suite;
use crate::value::Value;

use self::invocation::Invocation;

///
/// The test plan.
///
/// The invocation order is the enumeration order and therefore the execution order.
///
#[derive(Debug, Default)]
pub struct TestPlan {
    /// The enumerated invocations.
    invocations: Vec<Invocation>,
}

impl TestPlan {
    ///
    /// Expands the benchmark definition into invocations and appends them to the plan.
    ///
    /// The expansion is the full cross product of the runtime option combinations and the
    /// application option combinations. Combinations are enumerated lexicographically: the
    /// first option set varies slowest, and values follow their order within each set.
    /// An empty category contributes a single empty combination.
    ///
    /// Returns the number of appended invocations.
    ///
    pub fn add_test(
        &mut self,
        name: &str,
        suite: Arc<Suite>,
        main_class_or_script: &str,
        runtime_option_sets: &[OptionSet],
        app_option_sets: &[OptionSet],
        scale_factor: f64,
    ) -> Result<usize, Error> {
        if name.is_empty() {
            return Err(Error::configuration("Test short name is empty"));
        }
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(Error::configuration(format!(
                "Test `{name}` scale factor must be positive, found {scale_factor}"
            )));
        }

        let runtime_combinations = Self::combinations(runtime_option_sets, scale_factor)
            .map_err(|error| Self::in_test(name, "runtime", error))?;
        let app_combinations = Self::combinations(app_option_sets, scale_factor)
            .map_err(|error| Self::in_test(name, "application", error))?;

        let invocations = runtime_combinations
            .into_iter()
            .cartesian_product(app_combinations.iter())
            .map(|(runtime_options, app_options)| Invocation {
                name: name.to_owned(),
                suite: suite.clone(),
                main_class_or_script: main_class_or_script.to_owned(),
                runtime_options,
                app_options: app_options.to_owned(),
            })
            .collect::<Vec<Invocation>>();

        let count = invocations.len();
        self.invocations.extend(invocations);
        Ok(count)
    }

    ///
    /// Returns the invocations in execution order.
    ///
    pub fn invocations(&self) -> &[Invocation] {
        self.invocations.as_slice()
    }

    ///
    /// Returns the number of invocations.
    ///
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    ///
    /// Whether the plan is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    ///
    /// Returns the distinct suites used by the plan, in the order of first use.
    ///
    pub fn suites(&self) -> Vec<Arc<Suite>> {
        let mut suites: Vec<Arc<Suite>> = Vec::new();
        for invocation in self.invocations.iter() {
            if !suites
                .iter()
                .any(|suite| Arc::ptr_eq(suite, &invocation.suite))
            {
                suites.push(invocation.suite.clone());
            }
        }
        suites
    }

    ///
    /// Resolves the option sets of one category and computes their cross product.
    ///
    fn combinations(option_sets: &[OptionSet], scale_factor: f64) -> Result<Vec<Options>, Error> {
        let mut names = HashSet::with_capacity(option_sets.len());
        let mut resolved = Vec::with_capacity(option_sets.len());
        for option_set in option_sets.iter() {
            if !names.insert(option_set.name.as_str()) {
                return Err(Error::configuration(format!(
                    "Option `{}` is specified more than once",
                    option_set.name
                )));
            }
            let values = option_set.resolve(scale_factor)?;
            resolved.push((option_set.name.as_str(), values));
        }

        let combinations = resolved.iter().fold(
            vec![Vec::<(String, Value)>::new()],
            |combinations, (name, values)| {
                combinations
                    .into_iter()
                    .cartesian_product(values.iter())
                    .map(|(mut combination, value)| {
                        combination.push(((*name).to_owned(), value.to_owned()));
                        combination
                    })
                    .collect()
            },
        );

        Ok(combinations
            .into_iter()
            .map(|combination| combination.into_iter().collect())
            .collect())
    }

    ///
    /// Prefixes a configuration error with the test and category names.
    ///
    fn in_test(name: &str, category: &str, error: Error) -> Error {
        match error {
            Error::Configuration { message } => {
                Error::configuration(format!("Test `{name}` {category} options: {message}"))
            }
            error => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use super::TestPlan;
    use crate::error::Error;
    use crate::option_set::scaling::Scaling;
    use crate::option_set::OptionSet;
    use crate::suite::Suite;
    use crate::value::Value;

    fn suite() -> Arc<Suite> {
        Arc::new(Suite::python(Path::new("pyspark-tests")))
    }

    fn integers(name: &str, count: i64) -> OptionSet {
        OptionSet::fixed(name, (1..=count).map(Value::Integer).collect())
    }

    #[test]
    fn cross_product_size() {
        let mut plan = TestPlan::default();
        let count = plan
            .add_test(
                "scheduling-throughput",
                suite(),
                "core_tests.py",
                &[integers("a", 2), integers("b", 3)],
                &[integers("c", 4)],
                1.0,
            )
            .expect("Always valid");
        assert_eq!(count, 24);
        assert_eq!(plan.len(), 24);
    }

    #[test]
    fn empty_category_is_identity() {
        let mut plan = TestPlan::default();
        let count = plan
            .add_test(
                "count",
                suite(),
                "core_tests.py",
                &[integers("spark.executor.cores", 3)],
                &[],
                1.0,
            )
            .expect("Always valid");
        assert_eq!(count, 3);
        assert!(plan.invocations()[0].app_options.is_empty());
    }

    #[test]
    fn no_option_sets_at_all() {
        let mut plan = TestPlan::default();
        let count = plan
            .add_test("count", suite(), "core_tests.py", &[], &[], 1.0)
            .expect("Always valid");
        assert_eq!(count, 1);
    }

    #[test]
    fn lexicographic_order() {
        let mut plan = TestPlan::default();
        plan.add_test(
            "sort",
            suite(),
            "core_tests.py",
            &[integers("r", 2)],
            &[integers("a", 2), integers("b", 2)],
            1.0,
        )
        .expect("Always valid");

        let order = plan
            .invocations()
            .iter()
            .map(|invocation| {
                let r = invocation.runtime_options.get("r").expect("Always exists");
                let a = invocation.app_options.get("a").expect("Always exists");
                let b = invocation.app_options.get("b").expect("Always exists");
                format!("{r}{a}{b}")
            })
            .collect::<Vec<String>>();
        assert_eq!(
            order,
            vec!["111", "112", "121", "122", "211", "212", "221", "222"]
        );
    }

    #[test]
    fn repeated_add_is_deterministic() {
        let option_sets = [integers("a", 2), integers("b", 3)];
        let mut plan = TestPlan::default();
        plan.add_test("t", suite(), "s.py", &option_sets, &[], 1.0)
            .expect("Always valid");
        plan.add_test("t", suite(), "s.py", &option_sets, &[], 1.0)
            .expect("Always valid");

        let (first, second) = plan.invocations().split_at(6);
        for (first, second) in first.iter().zip(second.iter()) {
            assert_eq!(first.runtime_options, second.runtime_options);
            assert_eq!(first.app_options, second.app_options);
        }
    }

    #[test]
    fn no_deduplication() {
        let mut plan = TestPlan::default();
        let count = plan
            .add_test(
                "t",
                suite(),
                "s.py",
                &[],
                &[OptionSet::fixed(
                    "num-trials",
                    vec![Value::Integer(5), Value::Integer(5)],
                )],
                1.0,
            )
            .expect("Always valid");
        assert_eq!(count, 2);
    }

    #[test]
    fn scale_factor_applies() {
        let mut plan = TestPlan::default();
        plan.add_test(
            "t",
            suite(),
            "s.py",
            &[],
            &[OptionSet::scaled(
                "num-tasks",
                vec![Value::Integer(1000)],
                Scaling::Linear,
            )],
            0.1,
        )
        .expect("Always valid");
        assert_eq!(
            plan.invocations()[0].app_options.get("num-tasks"),
            Some(&Value::Integer(100))
        );
    }

    #[test]
    fn suites_are_deduplicated() {
        let shared = suite();
        let mut plan = TestPlan::default();
        plan.add_test("a", shared.clone(), "a.py", &[], &[], 1.0)
            .expect("Always valid");
        plan.add_test("b", shared, "b.py", &[], &[], 1.0)
            .expect("Always valid");
        plan.add_test("c", suite(), "c.py", &[], &[], 1.0)
            .expect("Always valid");
        assert_eq!(plan.suites().len(), 2);
    }

    #[test]
    fn error_duplicate_option() {
        let mut plan = TestPlan::default();
        let result = plan.add_test(
            "t",
            suite(),
            "s.py",
            &[integers("a", 1), integers("a", 2)],
            &[],
            1.0,
        );
        assert!(matches!(result, Err(Error::Configuration { .. })));
        assert!(plan.is_empty());
    }

    #[test]
    fn error_empty_option_set() {
        let mut plan = TestPlan::default();
        let result = plan.add_test(
            "t",
            suite(),
            "s.py",
            &[],
            &[OptionSet::fixed("num-trials", vec![])],
            1.0,
        );
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn error_invalid_scale_factor_without_option_sets() {
        for scale_factor in [-3.0, 0.0, f64::NAN] {
            let mut plan = TestPlan::default();
            assert!(matches!(
                plan.add_test("t", suite(), "s.py", &[], &[], scale_factor),
                Err(Error::Configuration { .. })
            ));
            assert!(plan.is_empty());
        }
    }
}
