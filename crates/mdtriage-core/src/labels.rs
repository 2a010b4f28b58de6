//! Hypothesis label taxonomy for zero-shot abstract triage.
//!
//! Labels are partitioned into three groups: Positive (the abstract is
//! polymer MD), Property (the MD work evaluates a measurable property,
//! the strongest signal for prioritization), and Negative (not polymer
//! MD, or the wrong kind of simulation). The concatenated sequence is
//! order-stable within a run: it is the candidate-label prompt handed
//! to the scorer, and score maps are indexed by position in it.

use std::ops::Range;
use std::sync::LazyLock;

/// Labels indicating polymer MD simulation work.
pub const POSITIVE_LABELS: &[&str] = &[
    "polymer molecular dynamics with force fields",
    "all-atom polymer molecular dynamics",
    "united-atom polymer molecular dynamics",
    "coarse-grained polymer MD (MARTINI)",
    "reactive polymer MD (ReaxFF)",
    "polymer melt or solution MD",
    "MD of polymer blends or copolymers",
    "polymer MD using LAMMPS or GROMACS",
    "polymer MD with OPLS/AMBER/CHARMM/COMPASS/DREIDING/PCFF/GROMOS/TraPPE",
];

/// Property-focused labels: MD that evaluates a measurable quantity.
pub const PROPERTY_LABELS: &[&str] = &[
    "polymer properties from MD (viscosity, diffusion, Tg)",
    "MD evaluation of polymer viscosity (rheology)",
    "MD estimation of polymer glass transition temperature (Tg)",
    "MD calculation of polymer diffusion or self-diffusion",
    "MD calculation of polymer mechanical properties (Young's modulus, stress–strain)",
    "MD prediction of polymer density or radius of gyration",
    "MD calculation of polymer transport or permeability",
];

/// Labels indicating work that should not be kept.
pub const NEGATIVE_LABELS: &[&str] = &[
    "experimental polymer rheology (no simulation)",
    "polymer synthesis or characterization (no simulation)",
    "quantum chemistry or DFT (no MD)",
    "Monte Carlo simulations (not MD)",
    "dissipative particle dynamics (DPD) without atomistic force fields",
    "continuum modeling or FEM/CFD (no MD)",
    "biomolecular MD (proteins/DNA, not polymers)",
    "materials science unrelated to polymers",
    "machine learning predictions without MD simulation",
    "review article (survey)",
];

static ALL_LABELS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    POSITIVE_LABELS
        .iter()
        .chain(PROPERTY_LABELS)
        .chain(NEGATIVE_LABELS)
        .copied()
        .collect()
});

/// Semantic group a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelGroup {
    Positive,
    Property,
    Negative,
}

impl LabelGroup {
    /// The labels in this group, in prompt order.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Positive => POSITIVE_LABELS,
            Self::Property => PROPERTY_LABELS,
            Self::Negative => NEGATIVE_LABELS,
        }
    }

    /// Index range of this group within the full label sequence.
    pub fn range(self) -> Range<usize> {
        let pos = POSITIVE_LABELS.len();
        let prop = pos + PROPERTY_LABELS.len();
        match self {
            Self::Positive => 0..pos,
            Self::Property => pos..prop,
            Self::Negative => prop..prop + NEGATIVE_LABELS.len(),
        }
    }
}

/// Full label sequence: Positive ++ Property ++ Negative.
pub fn all_labels() -> &'static [&'static str] {
    &ALL_LABELS
}

/// Number of labels across all groups.
pub fn label_count() -> usize {
    POSITIVE_LABELS.len() + PROPERTY_LABELS.len() + NEGATIVE_LABELS.len()
}

/// Group owning a position in the full label sequence.
pub fn group_of(index: usize) -> Option<LabelGroup> {
    [LabelGroup::Positive, LabelGroup::Property, LabelGroup::Negative]
        .into_iter()
        .find(|g| g.range().contains(&index))
}
