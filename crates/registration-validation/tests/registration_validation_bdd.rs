//! Behavioural tests for registration validation.
//!
//! These tests exercise the validation rules against Gherkin scenarios
//! covering boundaries, ordering, and the validity invariant.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use registration_validation::{
    RegistrationCheck, RegistrationInput, ValidationResult, validate_registration,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the form values and the validation outcome.
#[derive(Default, ScenarioState)]
struct World {
    username: Slot<String>,
    email: Slot<String>,
    password: Slot<String>,
    result: Slot<ValidationResult>,
}

impl World {
    fn result(&self) -> ValidationResult {
        self.result.get().expect("registration should be validated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn unquote(raw: &str) -> String {
    raw.trim_matches('"').to_owned()
}

fn parse_check(name: &str) -> RegistrationCheck {
    RegistrationCheck::ALL
        .into_iter()
        .find(|check| check.field() == name.trim())
        .unwrap_or_else(|| panic!("unknown check name: {name}"))
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the username {value}")]
fn the_username(world: &World, value: String) {
    world.username.set(unquote(&value));
}

#[given("the email {value}")]
fn the_email(world: &World, value: String) {
    world.email.set(unquote(&value));
}

#[given("the password {value}")]
fn the_password(world: &World, value: String) {
    world.password.set(unquote(&value));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the registration is validated")]
fn the_registration_is_validated(world: &World) {
    let input = RegistrationInput::new(
        world.username.get().unwrap_or_default(),
        world.email.get().unwrap_or_default(),
        world.password.get().unwrap_or_default(),
    );
    world.result.set(validate_registration(&input));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the registration is valid")]
fn the_registration_is_valid(world: &World) {
    assert!(world.result().is_valid(), "expected a valid registration");
}

#[then("the registration is invalid")]
fn the_registration_is_invalid(world: &World) {
    let result = world.result();
    assert!(!result.is_valid(), "expected an invalid registration");
    assert!(!result.messages().is_empty());
}

#[then("no messages are reported")]
fn no_messages_are_reported(world: &World) {
    assert!(world.result().messages().is_empty());
}

#[then("the reported checks are {checks}")]
fn the_reported_checks_are(world: &World, checks: String) {
    let expected: Vec<RegistrationCheck> =
        unquote(&checks).split(',').map(parse_check).collect();
    let result = world.result();
    assert_eq!(result.failures(), expected.as_slice());
    let expected_messages: Vec<String> = expected
        .iter()
        .map(|check| check.message().to_owned())
        .collect();
    assert_eq!(result.messages(), expected_messages);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/registration_validation.feature",
    name = "All fields valid"
)]
fn all_fields_valid(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_validation.feature",
    name = "Username at the length boundary"
)]
fn username_at_the_length_boundary(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_validation.feature",
    name = "Whitespace-only username is rejected"
)]
fn whitespace_only_username_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_validation.feature",
    name = "Email without a dot is rejected"
)]
fn email_without_a_dot_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_validation.feature",
    name = "Every failing field is reported in order"
)]
fn every_failing_field_is_reported_in_order(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_validation.feature",
    name = "Only the later fields fail"
)]
fn only_the_later_fields_fail(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_validation.feature",
    name = "Emoji count as two units towards the length limits"
)]
fn emoji_count_as_two_units_towards_the_length_limits(world: World) {
    let _ = world;
}
