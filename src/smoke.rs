use std::io::{self, Write};

use anyhow::{Context, Result, ensure};
use int_vector::IntVector;
use log::{error, info};

use crate::cli::{Algorithm, Cli, Growth};
use crate::runtime::{Violation, fill_random, verify_sorted};

/// Fills, sorts and verifies one vector as configured by `cli`.
///
/// Returns the out-of-order pairs left after sorting; empty on success.
pub fn run_smoke(cli: &Cli) -> Result<Vec<Violation>> {
    ensure!(
        cli.growth != Growth::Linear || cli.increment > 0,
        "--increment must be at least 1"
    );

    let mut v = IntVector::with_config(cli.capacity, cli.vector_config());
    if cli.values.is_empty() {
        fill_random(&mut v, cli.capacity, cli.seed);
    } else {
        v.extend(cli.values.iter().copied());
    }
    info!(
        "sorting {} values (capacity {}) with {:?}, config {:?}",
        v.len(),
        v.capacity(),
        cli.algorithm,
        v.config()
    );

    match cli.algorithm {
        Algorithm::Quick => v.quick_sort(),
        Algorithm::Bubble => {
            let passes = v.bubble_sort();
            info!("bubble sort made {} passes", passes);
        }
    }

    let violations = verify_sorted(&v);
    if violations.is_empty() {
        info!("{} values in ascending order", v.len());
    } else {
        error!("{} out-of-order pairs after sorting", violations.len());
    }
    Ok(violations)
}

/// Writes one line per violation followed by the total count.
pub fn report_violations<W: Write>(
    out: &mut W,
    prog: &str,
    violations: &[Violation],
) -> io::Result<()> {
    for violation in violations {
        writeln!(out, "{}: {}", prog, violation)?;
    }
    writeln!(out, "{}: {} violations", prog, violations.len())
}

pub fn run_all_scenarios() -> Result<()> {
    println!("--- Running Search And Sort Scenario ---");
    run_search_and_sort().context("search and sort scenario")?;

    println!("--- Running Zero Capacity Scenario ---");
    run_zero_capacity().context("zero capacity scenario")?;

    println!("--- Running Shrink Scenario ---");
    run_shrink().context("shrink scenario")?;

    println!("--- Running Insert/Delete Scenario ---");
    run_insert_delete().context("insert/delete scenario")?;

    Ok(())
}

fn run_search_and_sort() -> Result<()> {
    let mut v = IntVector::with_capacity(5);
    for x in [5, 3, 1, 4, 2] {
        v.push_back(x);
    }
    ensure!(v.len() == 5, "expected size 5, got {}", v.len());

    let found = v.linear_search(4);
    ensure!(found == 3, "linear_search(4): expected 3, got {}", found);

    v.quick_sort();
    ensure!(
        v.as_slice() == [1, 2, 3, 4, 5],
        "quick_sort: expected [1, 2, 3, 4, 5], got {:?}",
        v.as_slice()
    );

    let found = v.binary_search(3);
    ensure!(found == 2, "binary_search(3): expected 2, got {}", found);
    println!("sorted {:?}, binary_search(3) = {}", v.as_slice(), found);
    Ok(())
}

fn run_zero_capacity() -> Result<()> {
    let mut v = IntVector::with_capacity(0);
    ensure!(v.is_empty(), "new zero-capacity vector is not empty");
    ensure!(v.is_full(), "new zero-capacity vector is not full");

    v.push_back(7);
    let (capacity, first) = (v.capacity(), v.get_at(0));
    ensure!(capacity >= 1, "capacity did not grow: {}", capacity);
    ensure!(first == 7, "get_at(0): expected 7, got {}", first);
    println!("capacity after push_back(7) = {}", capacity);
    Ok(())
}

fn run_shrink() -> Result<()> {
    let mut v = IntVector::with_capacity(3);
    v.extend([1, 2, 3]);
    v.set_capacity(1);
    ensure!(v.len() == 1, "expected size 1, got {}", v.len());

    let first = v.get_at(0);
    ensure!(first == 1, "get_at(0): expected 1, got {}", first);
    println!("after set_capacity(1): {:?}", v);
    Ok(())
}

fn run_insert_delete() -> Result<()> {
    let original: IntVector = (0..20).collect();
    for i in 0..=original.len() {
        let mut v = original.clone();
        v.insert_at(i, -1);
        let removed = v.delete_at(i);
        ensure!(removed == -1, "delete_at({}) returned {}", i, removed);
        ensure!(v == original, "insert/delete at {} changed {:?}", i, v);
    }
    println!("insert/delete restored {} values", original.len());
    Ok(())
}
