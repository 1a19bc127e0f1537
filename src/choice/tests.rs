use deepforce_testkit::{TestCell, count, counter, counting_cell, trap_cell};

use crate::{ForceDeep, Forced};

#[test]
fn some_forces_contents() {
	let tally = counter();
	let value = Some(counting_cell(&tally, 11_i32));

	value.force_deep();

	assert_eq!(count(&tally), 1);
}

#[test]
fn none_is_already_forced() {
	let value: Option<TestCell<i32>> = None;
	assert_eq!(value.force_deep(), Forced);
}

#[test]
fn result_forces_only_populated_alternative() {
	let tally = counter();
	let ok_cell = counting_cell(&tally, 1_i32);
	let trap: TestCell<i32> = trap_cell("absent err alternative");

	// Only the Ok side of this value exists; the trap cell lives in a
	// different value and must stay untouched.
	let populated: Result<&TestCell<i32>, &TestCell<i32>> = Ok(&ok_cell);
	populated.force_deep();

	assert_eq!(count(&tally), 1);

	let failing: Result<&TestCell<i32>, &TestCell<i32>> = Err(&trap);
	drop(failing);
}

#[test]
fn err_side_is_forced_when_populated() {
	let tally = counter();
	let value: Result<TestCell<i32>, TestCell<i32>> = Err(counting_cell(&tally, 2));

	value.force_deep();

	assert_eq!(count(&tally), 1);
}
