use std::any::Any;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::collections::{distinct_default, Dictionary};
use crate::comparer::{EqualityComparer, FullComparer};
use crate::cuboid::{Cuboid, Equatable, EquatableCuboid, ObjectEq};
use crate::hash_code::HashCode;

const COLORS: [&str; 3] = ["red", "blue", "green"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub rejected: Vec<String>,
    pub dictionary_len: usize,
    pub comparisons: Vec<bool>,
    pub set_len: usize,
    pub distinct_len: usize,
}

pub fn run_comparer_demo<W: Write>(out: &mut W) -> Result<Report> {
    debug!("running comparer demo");
    let mut report = Report::default();

    let cuboid1 = Cuboid::new(4, 3, 4);
    let cuboid2 = Cuboid::new(4, 3, 4);
    let cuboid3 = Cuboid::new(3, 4, 3);
    let cuboid4 = Cuboid::new(4, 4, 3);

    let comparer = FullComparer;
    let mut cuboids = Dictionary::with_comparer(comparer);
    add_cuboids(&mut cuboids, [cuboid1, cuboid2, cuboid3], out, &mut report)?;

    let others = [("cuboid2", &cuboid2), ("cuboid3", &cuboid3), ("cuboid4", &cuboid4)];
    for (name, other) in others {
        let equal = comparer.equals(Some(&cuboid1), Some(other));
        compare(out, &mut report, name, "EqualityComparer", equal)?;
    }
    for (name, other) in others {
        let equal = cuboid1.equals(Some(other as &dyn Any));
        compare(out, &mut report, name, "overridden equals()", equal)?;
    }

    let all = [cuboid1, cuboid2, cuboid3, cuboid4];
    count_unique(all, out, &mut report)?;

    Ok(report)
}

pub fn run_equatable_demo<W: Write>(out: &mut W) -> Result<Report> {
    debug!("running equatable demo");
    let mut report = Report::default();

    let cuboid1 = EquatableCuboid::new(4, 3, 4);
    let cuboid2 = EquatableCuboid::new(4, 3, 4);
    let cuboid3 = EquatableCuboid::new(3, 4, 3);
    let cuboid4 = EquatableCuboid::new(4, 4, 3);

    let mut cuboids = Dictionary::new();
    add_cuboids(&mut cuboids, [cuboid1, cuboid2, cuboid3], out, &mut report)?;

    let others = [("cuboid2", &cuboid2), ("cuboid3", &cuboid3), ("cuboid4", &cuboid4)];
    for (name, other) in others {
        let equal = cuboid1.equals_typed(Some(other));
        compare(out, &mut report, name, "overridden equals()", equal)?;
    }
    for (name, other) in others {
        let equal = cuboid1 == *other;
        compare(out, &mut report, name, "overridden == operator", equal)?;
    }

    let all = [cuboid1, cuboid2, cuboid3, cuboid4];
    count_unique(all, out, &mut report)?;

    Ok(report)
}

fn add_cuboids<K, C, W>(
    cuboids: &mut Dictionary<K, &'static str, C>,
    keys: [K; 3],
    out: &mut W,
    report: &mut Report,
) -> Result<()>
where
    K: Display,
    C: EqualityComparer<K>,
    W: Write,
{
    for (key, color) in keys.into_iter().zip(COLORS) {
        let shown = key.to_string();
        if let Err(e) = cuboids.add(key, color) {
            writeln!(out, "Unable to add {}: {}", shown, e)?;
            report.rejected.push(shown);
        }
    }

    report.dictionary_len = cuboids.len();
    writeln!(out, "The dictionary contains {} cuboids.", cuboids.len())?;
    Ok(())
}

fn compare<W: Write>(
    out: &mut W,
    report: &mut Report,
    other: &str,
    via: &str,
    equal: bool,
) -> Result<()> {
    writeln!(out, "Does cuboid1 equal {} with {}: {}", other, via, equal)?;
    report.comparisons.push(equal);
    Ok(())
}

// Both counts go through the element type's own `Eq` and hash.
fn count_unique<T, W>(all: [T; 4], out: &mut W, report: &mut Report) -> Result<()>
where
    T: Eq + Hash + Copy + HashCode,
    W: Write,
{
    let set: HashSet<T> = all.iter().copied().collect();
    report.set_len = set.len();
    writeln!(out, "Number of elements in the Cuboid HashSet: {}", set.len())?;

    report.distinct_len = distinct_default(all).len();
    writeln!(
        out,
        "Number of distinct elements in the Cuboid list: {}",
        report.distinct_len
    )?;
    Ok(())
}
