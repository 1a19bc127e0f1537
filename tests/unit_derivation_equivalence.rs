use deepforce_testkit::{Counter, TestCell, count, counter, counting_cell};

use deepforce::{ForceDeep, Forced, Shape, Shaped, derive_force_deep};

// Two structurally identical records: one forces by hand, the other
// through a declared shape. Equivalent input graphs must end up in the
// same forced state.

struct HandWritten {
	head: TestCell<i32>,
	tail: Vec<TestCell<i32>>,
	label: Option<TestCell<i32>>,
}

impl ForceDeep for HandWritten {
	fn force_deep(&self) -> Forced {
		self.head.force_deep();
		self.tail.force_deep();
		self.label.force_deep()
	}
}

struct ShapeDerived {
	head: TestCell<i32>,
	tail: Vec<TestCell<i32>>,
	label: Option<TestCell<i32>>,
}

impl Shaped for ShapeDerived {
	fn shape() -> Shape<Self> {
		Shape::meta(
			"ShapeDerived",
			Shape::product(
				Shape::field(|value| &value.head),
				Shape::product(
					Shape::field(|value| &value.tail),
					Shape::field(|value| &value.label),
				),
			),
		)
	}
}

derive_force_deep!(ShapeDerived);

fn readings(tallies: &[Counter]) -> Vec<usize> {
	tallies.iter().map(count).collect()
}

#[test]
fn hand_written_and_derived_reach_the_same_forced_state() {
	let hand_tallies = vec![counter(), counter(), counter()];
	let hand = HandWritten {
		head: counting_cell(&hand_tallies[0], 1),
		tail: vec![counting_cell(&hand_tallies[1], 2)],
		label: Some(counting_cell(&hand_tallies[2], 3)),
	};

	let derived_tallies = vec![counter(), counter(), counter()];
	let derived = ShapeDerived {
		head: counting_cell(&derived_tallies[0], 1),
		tail: vec![counting_cell(&derived_tallies[1], 2)],
		label: Some(counting_cell(&derived_tallies[2], 3)),
	};

	hand.force_deep();
	derived.force_deep();

	assert_eq!(readings(&hand_tallies), vec![1, 1, 1]);
	assert_eq!(readings(&hand_tallies), readings(&derived_tallies));

	hand.force_deep();
	derived.force_deep();

	assert_eq!(readings(&hand_tallies), readings(&derived_tallies));
}

#[test]
fn equivalence_holds_with_absent_alternatives() {
	let hand_tally = counter();
	let hand = HandWritten {
		head: counting_cell(&hand_tally, 1),
		tail: Vec::new(),
		label: None,
	};

	let derived_tally = counter();
	let derived = ShapeDerived {
		head: counting_cell(&derived_tally, 1),
		tail: Vec::new(),
		label: None,
	};

	hand.force_deep();
	derived.force_deep();

	assert_eq!(count(&hand_tally), 1);
	assert_eq!(count(&hand_tally), count(&derived_tally));
}
