//! Demonstration walkthrough plus a randomized differential run of
//! `SinglyLinkedList` against `Vec` as the reference implementation.
//!
//! Pass a seed as the first argument to replay a specific run.

use std::env;
use std::process::ExitCode;

use linked_lists::SinglyLinkedList;
use rand::{rngs::StdRng, Rng, SeedableRng};

mod ops;
use ops::{Operation, Outcome};

const DEFAULT_OPS: usize = 10_000;

fn main() -> ExitCode {
    demo();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| rand::thread_rng().gen());
    println!();
    println!("replaying {DEFAULT_OPS} random operations against the Vec reference (seed {seed})");
    match run(seed, DEFAULT_OPS) {
        Ok(()) => {
            println!("every operation agreed with the reference");
            ExitCode::SUCCESS
        }
        Err(failure) => {
            failure.playback();
            ExitCode::FAILURE
        }
    }
}

fn demo() {
    let mut list = SinglyLinkedList::new();
    list.push_front(10);
    list.push_front(5);
    list.push_back(20);
    list.push_back(30);
    list.insert(2, 15).expect("index 2 is inside a four element list");
    list.push_back(5);

    println!("after insertions: {list}");
    println!("size: {}", list.len());
    println!("sum: {}", list.sum());
    println!(
        "average: {}",
        list.average().expect("demo list is not empty")
    );
    println!("min: {}", list.min().expect("demo list is not empty"));
    println!("max: {}", list.max().expect("demo list is not empty"));

    println!("find 15: {:?}", list.find(&15));
    println!("contains 25: {}", list.contains(&25));
    println!("count of 5: {}", list.count_occurrences(&5));

    let previous = list.set(2, 25).expect("index 2 is inside the list");
    println!("replaced {previous} at index 2: {list}");

    list.sort();
    println!("after sort: {list}");
    list.dedup();
    println!("after dedup: {list}");

    println!("removed from front: {:?}", list.pop_front());
    println!("removed from back: {:?}", list.pop_back());
    list.reverse();
    println!("after reverse: {list}");
}

struct OperationFailure {
    seed: u64,
    op_num: usize,
    expected: Outcome,
    actual: Outcome,
    list: String,
    model: Vec<i32>,
    tail: Vec<Operation>,
}

fn run(seed: u64, ops: usize) -> Result<(), OperationFailure> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = SinglyLinkedList::new();
    let mut model: Vec<i32> = Vec::new();
    let mut history: Vec<Operation> = Vec::with_capacity(ops);

    for op_num in 0..ops {
        let op: Operation = rng.gen();
        history.push(op);
        let expected = op.apply_model(&mut model);
        let actual = op.apply_list(&mut list);
        if expected != actual || list.len() != model.len() || list.to_vec() != model {
            let tail_start = op_num.saturating_sub(5);
            return Err(OperationFailure {
                seed,
                op_num,
                expected,
                actual,
                list: list.to_string(),
                model,
                tail: history[tail_start..].to_vec(),
            });
        }
    }
    Ok(())
}

impl OperationFailure {
    /// Prints the failing tail of the run so it can be replayed by seed.
    fn playback(&self) {
        println!(
            "operation {} diverged from the reference (seed {})",
            self.op_num, self.seed
        );
        let first = self.op_num + 1 - self.tail.len();
        for (offset, op) in self.tail.iter().enumerate() {
            println!("--------- operation {} ----------", first + offset);
            println!("operation: {op:?}");
        }
        println!("expected / actual : {:?}, {:?}", self.expected, self.actual);
        println!("list state : {}", self.list);
        println!("model state: {:?}", self.model);
    }
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn seeded_runs_agree_with_reference() {
        for seed in 0..8 {
            assert!(run(seed, 2_000).is_ok(), "seed {seed} diverged");
        }
    }

    #[test]
    fn long_run_agrees_with_reference() {
        assert!(run(20_220_520, 20_000).is_ok());
    }
}
