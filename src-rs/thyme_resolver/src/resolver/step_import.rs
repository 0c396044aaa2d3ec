//! Step import and data provider import resolution.
//!
//! A step that imports another step runs the imported step's actions and
//! assertions before its own, and can use the elements the imported step
//! declares. The imported step may itself import a step, so the chain is
//! followed until a step without a step import is reached.
//!
//! ```text
//! test step ──use──▶ sign_in ──use──▶ open_login ──▶ (no import)
//! ```
//!
//! The chain is followed with a [`Stack`] of the import names seen on the
//! current path. A name that appears twice is a cycle.

use thyme_model::{PendingImportStep, Step, StepDefinition, StepImportName};
use tracing::{debug, trace};

use crate::{
    error::ResolutionError,
    provider::{DataSetProvider, StepProvider},
    resolver::lookup::{find_data_sets, find_step},
    util::Stack,
};

/// The longest step import chain that will be followed.
pub const MAX_IMPORT_DEPTH: usize = 64;

/// Resolves the step import of a step definition.
///
/// Plain steps and pending steps without a step import are returned
/// unchanged. A pending data provider import is kept.
///
/// # Errors
///
/// Returns an error if an imported step cannot be found, the import chain
/// contains a cycle, or the chain is longer than [`MAX_IMPORT_DEPTH`].
pub fn resolve_step_import(
    definition: &StepDefinition,
    steps: &dyn StepProvider,
) -> Result<StepDefinition, ResolutionError> {
    match definition {
        StepDefinition::Plain(_) => Ok(definition.clone()),
        StepDefinition::PendingImport(pending) => {
            resolve_pending_step_import(pending, steps, &Stack::new())
        }
    }
}

fn resolve_pending_step_import(
    pending: &PendingImportStep,
    steps: &dyn StepProvider,
    stack: &Stack<StepImportName>,
) -> Result<StepDefinition, ResolutionError> {
    let Some(import_name) = pending.import_name() else {
        return Ok(pending.clone().collapse());
    };

    if let Some(cycle) =
        stack.find_circular_dependency_by(import_name, StepImportName::normalized)
    {
        debug!(import = %import_name, "circular step import detected");
        return Err(ResolutionError::circular_step_import(
            import_name.clone(),
            cycle,
        ));
    }

    if stack.len() >= MAX_IMPORT_DEPTH {
        return Err(ResolutionError::import_depth_exceeded(
            import_name.clone(),
            MAX_IMPORT_DEPTH,
        ));
    }

    trace!(import = %import_name, depth = stack.len(), "following step import");

    let parent = match find_step(import_name, steps)? {
        StepDefinition::Plain(parent) => parent.clone(),
        StepDefinition::PendingImport(parent) => {
            let import_stack = stack.pushed(import_name.clone());
            resolve_pending_step_import(parent, steps, &import_stack)?.into_step()
        }
    };

    let step = inherit(&parent, pending.step());

    Ok(pending
        .clone()
        .with_step(step)
        .without_import_name()
        .collapse())
}

/// Builds a step that runs `parent` before `child`.
///
/// Elements declared by `child` take precedence over those declared by
/// `parent`. The data sets of `parent` are not inherited.
fn inherit(parent: &Step, child: &Step) -> Step {
    let actions = parent
        .actions()
        .iter()
        .chain(child.actions())
        .cloned()
        .collect();

    let assertions = parent
        .assertions()
        .iter()
        .chain(child.assertions())
        .cloned()
        .collect();

    let identifiers = parent.identifiers().merged_with(child.identifiers());

    child
        .clone()
        .with_actions(actions)
        .with_assertions(assertions)
        .with_identifiers(identifiers)
}

/// Resolves the data provider import of a step definition.
///
/// Plain steps and pending steps without a data provider import are
/// returned unchanged. A pending step import is kept.
///
/// # Errors
///
/// Returns an error if the data provider cannot be found.
pub fn resolve_data_provider_import(
    definition: &StepDefinition,
    data_sets: &dyn DataSetProvider,
) -> Result<StepDefinition, ResolutionError> {
    let StepDefinition::PendingImport(pending) = definition else {
        return Ok(definition.clone());
    };

    let Some(import_name) = pending.data_provider_import_name() else {
        return Ok(definition.clone());
    };

    let data_sets = find_data_sets(import_name, data_sets)?;
    trace!(data_provider = %import_name, data_sets = data_sets.len(), "attached data sets");

    let step = pending.step().clone().with_data_sets(data_sets.clone());

    Ok(pending
        .clone()
        .with_step(step)
        .without_data_provider_import_name()
        .collapse())
}

#[cfg(test)]
mod tests {
    use thyme_model::{DataProviderName, DataSet, DataSetCollection, ElementName};

    use super::*;
    use crate::{
        error::ResolutionErrorKind,
        provider::{EmptyProvider, PopulatedProvider},
        test::{
            assert_resolution_error,
            construct::{StepBuilder, css, names_of_clicked},
        },
    };

    fn step_provider(
        steps: impl IntoIterator<Item = (&'static str, StepDefinition)>,
    ) -> PopulatedProvider<StepImportName, StepDefinition> {
        let mut provider = PopulatedProvider::new();
        for (name, step) in steps {
            provider.insert(StepImportName::new(name), step);
        }
        provider
    }

    #[test]
    fn plain_step_is_unchanged() {
        let step = StepBuilder::new().click("a").build();

        assert_eq!(resolve_step_import(&step, &EmptyProvider), Ok(step));
    }

    #[test]
    fn parent_actions_run_first_and_ancestors_before_parents() {
        let steps = step_provider([
            ("a", StepBuilder::new().click("a1").click("a2").importing("b").build()),
            ("b", StepBuilder::new().click("b1").importing("c").build()),
            ("c", StepBuilder::new().click("c1").build()),
        ]);
        let root = StepBuilder::new().click("root").importing("a").build();

        let resolved = resolve_step_import(&root, &steps).expect("chain should resolve");

        let StepDefinition::Plain(step) = resolved else {
            panic!("step should be plain once its import is resolved");
        };
        assert_eq!(names_of_clicked(&step), ["c1", "b1", "a1", "a2", "root"]);
    }

    #[test]
    fn parent_assertions_run_first() {
        let steps = step_provider([("open", StepBuilder::new().exists("banner").build())]);
        let root = StepBuilder::new().exists("form").importing("open").build();

        let resolved = resolve_step_import(&root, &steps).expect("import should resolve");

        let sources: Vec<_> = resolved
            .step()
            .assertions()
            .iter()
            .map(|assertion| assertion.source().to_string())
            .collect();
        assert_eq!(sources, ["$elements.banner exists", "$elements.form exists"]);
    }

    #[test]
    fn child_elements_override_parent_elements() {
        let steps = step_provider([(
            "open",
            StepBuilder::new()
                .with_element("form", css("form.old"))
                .with_element("logo", css(".logo"))
                .build(),
        )]);
        let root = StepBuilder::new()
            .with_element("form", css("form.new"))
            .importing("open")
            .build();

        let resolved = resolve_step_import(&root, &steps).expect("import should resolve");

        let identifiers = resolved.step().identifiers();
        let form = identifiers
            .element(&ElementName::new("form"))
            .expect("form is declared");
        assert_eq!(form.locator().selector(), "form.new");
        assert!(identifiers.contains(&ElementName::new("logo")));
    }

    #[test]
    fn unknown_step() {
        let root = StepBuilder::new().importing("s").build();

        assert_resolution_error!(
            resolve_step_import(&root, &EmptyProvider),
            ResolutionErrorKind::UnknownStep { import_name } if import_name.as_str() == "s"
        );
    }

    #[test]
    fn non_retrievable_step() {
        let steps: PopulatedProvider<StepImportName, StepDefinition> = PopulatedProvider::new()
            .with_non_retrievable(StepImportName::new("s"), "could not read steps/s.yml");
        let root = StepBuilder::new().importing("s").build();

        assert_resolution_error!(
            resolve_step_import(&root, &steps),
            ResolutionErrorKind::NonRetrievableStep { reason, .. }
                if reason == "could not read steps/s.yml"
        );
    }

    #[test]
    fn circular_import_is_rejected() {
        let steps = step_provider([
            ("a", StepBuilder::new().click("a").importing("b").build()),
            ("b", StepBuilder::new().click("b").importing("a").build()),
        ]);
        let root = StepBuilder::new().importing("a").build();

        let error = resolve_step_import(&root, &steps).expect_err("cycle should be rejected");

        let ResolutionErrorKind::CircularStepImport { import_name, cycle } = error.kind() else {
            panic!("unexpected error {error:?}");
        };
        assert_eq!(import_name.as_str(), "a");
        let cycle: Vec<_> = cycle.iter().map(StepImportName::as_str).collect();
        assert_eq!(cycle, ["a", "b", "a"]);
    }

    #[test]
    fn self_import_is_rejected() {
        let steps = step_provider([("a", StepBuilder::new().importing("a").build())]);
        let root = StepBuilder::new().importing("a").build();

        assert_resolution_error!(
            resolve_step_import(&root, &steps),
            ResolutionErrorKind::CircularStepImport { .. }
        );
    }

    #[test]
    fn cycles_are_detected_regardless_of_case() {
        let steps = step_provider([
            ("a", StepBuilder::new().importing("B").build()),
            ("B", StepBuilder::new().importing("A").build()),
            ("A", StepBuilder::new().importing("b").build()),
        ]);
        let root = StepBuilder::new().importing("a").build();

        assert_resolution_error!(
            resolve_step_import(&root, &steps),
            ResolutionErrorKind::CircularStepImport { import_name, .. }
                if import_name.as_str() == "A"
        );
    }

    #[test]
    fn shared_ancestor_is_not_a_cycle() {
        let steps = step_provider([
            ("left", StepBuilder::new().click("left").importing("base").build()),
            ("right", StepBuilder::new().click("right").importing("base").build()),
            ("base", StepBuilder::new().click("base").build()),
        ]);

        for import in ["left", "right"] {
            let root = StepBuilder::new().importing(import).build();
            let resolved = resolve_step_import(&root, &steps).expect("diamond should resolve");
            let StepDefinition::Plain(step) = resolved else {
                panic!("step should be plain once its import is resolved");
            };
            assert_eq!(names_of_clicked(&step), ["base", import]);
        }
    }

    #[test]
    fn long_chains_are_cut_off() {
        let chain_length = MAX_IMPORT_DEPTH + 2;
        let mut provider = PopulatedProvider::new();
        for index in 0..chain_length {
            let next = format!("step_{}", index + 1);
            provider.insert(
                StepImportName::new(format!("step_{index}")),
                StepBuilder::new().importing(&next).build(),
            );
        }
        let root = StepBuilder::new().importing("step_0").build();

        assert_resolution_error!(
            resolve_step_import(&root, &provider),
            ResolutionErrorKind::ImportDepthExceeded { max_depth, .. }
                if *max_depth == MAX_IMPORT_DEPTH
        );
    }

    #[test]
    fn parent_data_provider_is_not_inherited() {
        let steps = step_provider([(
            "open",
            StepBuilder::new().click("a").using_data("users").build(),
        )]);
        let root = StepBuilder::new().importing("open").build();

        let resolved = resolve_step_import(&root, &steps).expect("import should resolve");

        assert_eq!(resolved.as_plain().map(Step::data_sets), Some(None));
    }

    #[test]
    fn step_import_keeps_pending_data_provider() {
        let steps = step_provider([("open", StepBuilder::new().build())]);
        let root = StepBuilder::new()
            .importing("open")
            .using_data("users")
            .build();

        let resolved = resolve_step_import(&root, &steps).expect("import should resolve");

        let StepDefinition::PendingImport(pending) = resolved else {
            panic!("data provider import is still pending");
        };
        assert_eq!(pending.import_name(), None);
        assert_eq!(
            pending.data_provider_import_name(),
            Some(&DataProviderName::new("users"))
        );
    }

    #[test]
    fn data_provider_import_attaches_data_sets() {
        let users = DataSetCollection::new(vec![DataSet::new(
            "0",
            [("key1".to_string(), "x".to_string())].into_iter().collect(),
        )]);
        let data_sets =
            PopulatedProvider::new().with_entry(DataProviderName::new("users"), users.clone());
        let root = StepBuilder::new().click("a").using_data("users").build();

        let resolved =
            resolve_data_provider_import(&root, &data_sets).expect("data provider should resolve");

        let StepDefinition::Plain(step) = resolved else {
            panic!("step should be plain once its data provider is resolved");
        };
        assert_eq!(step.data_sets(), Some(&users));
    }

    #[test]
    fn unknown_data_provider() {
        let root = StepBuilder::new().using_data("users").build();

        assert_resolution_error!(
            resolve_data_provider_import(&root, &EmptyProvider),
            ResolutionErrorKind::UnknownDataProvider { import_name }
                if import_name.as_str() == "users"
        );
    }

    #[test]
    fn non_retrievable_data_provider() {
        let data_sets: PopulatedProvider<DataProviderName, DataSetCollection> =
            PopulatedProvider::new().with_non_retrievable(DataProviderName::new("users"), "bad");
        let root = StepBuilder::new().using_data("users").build();

        assert_resolution_error!(
            resolve_data_provider_import(&root, &data_sets),
            ResolutionErrorKind::NonRetrievableDataProvider { .. }
        );
    }
}
