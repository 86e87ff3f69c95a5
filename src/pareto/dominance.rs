use crate::graph::Sense;

/// True when `a` dominates `b`: at least as good in every objective under
/// its sense and strictly better in at least one. Infinity is worse than any
/// finite value in a minimized dimension and better in a maximized one,
/// which the plain float comparisons already encode.
pub fn dominates(a: &[f64], b: &[f64], senses: &[Sense]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), senses.len());

    let mut strict = false;
    for i in 0..a.len() {
        match senses[i] {
            Sense::Minimize => {
                if a[i] > b[i] {
                    return false;
                }
                if a[i] < b[i] {
                    strict = true;
                }
            }
            Sense::Maximize => {
                if a[i] < b[i] {
                    return false;
                }
                if a[i] > b[i] {
                    strict = true;
                }
            }
        }
    }
    strict
}

/// Weak dominance within a relative tolerance: `a` epsilon-dominates `b`
/// when it is at least as good as `b` in every dimension once `b` is
/// relaxed by `epsilon`. Used to thin crowded label sets at the Pareto cap;
/// no strict inequality is required.
pub fn epsilon_dominates(a: &[f64], b: &[f64], senses: &[Sense], epsilon: f64) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), senses.len());

    for i in 0..a.len() {
        let slack = epsilon * b[i].abs();
        match senses[i] {
            Sense::Minimize => {
                if a[i] > b[i] + slack {
                    return false;
                }
            }
            Sense::Maximize => {
                if a[i] < b[i] - slack {
                    return false;
                }
            }
        }
    }
    true
}

/// Scalar surrogate ordering the expansion queue: the sum of minimized
/// objectives minus the sum of maximized ones. Any deterministic total
/// order would do; results do not depend on it because dominance is
/// order-free.
pub fn scalar_surrogate(objectives: &[f64], senses: &[Sense]) -> f64 {
    objectives
        .iter()
        .zip(senses)
        .map(|(o, sense)| match sense {
            Sense::Minimize => *o,
            Sense::Maximize => -*o,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN2: [Sense; 2] = [Sense::Minimize, Sense::Minimize];
    const MIXED: [Sense; 2] = [Sense::Minimize, Sense::Maximize];

    #[test]
    fn strict_improvement_is_required() {
        assert!(dominates(&[1.0, 2.0], &[1.0, 3.0], &MIN2));
        assert!(!dominates(&[1.0, 2.0], &[1.0, 2.0], &MIN2));
        assert!(!dominates(&[1.0, 3.0], &[2.0, 2.0], &MIN2));
    }

    #[test]
    fn senses_flip_the_comparison() {
        // lower cost, higher yield dominates under (min, max)
        assert!(dominates(&[1.0, 9.0], &[2.0, 8.0], &MIXED));
        assert!(!dominates(&[1.0, 7.0], &[2.0, 8.0], &MIXED));
    }

    #[test]
    fn infinity_is_worst_for_minimize_and_best_for_maximize() {
        assert!(dominates(&[1.0, 1.0], &[f64::INFINITY, 1.0], &MIN2));
        assert!(!dominates(&[f64::INFINITY, 0.0], &[1.0, 1.0], &MIN2));
        assert!(dominates(&[1.0, f64::INFINITY], &[1.0, 5.0], &MIXED));
    }

    #[test]
    fn epsilon_dominance_absorbs_near_duplicates() {
        let a = [1.0, 2.0];
        let near = [1.0 + 1e-9, 2.0];
        assert!(epsilon_dominates(&a, &near, &MIN2, 1e-6));
        assert!(epsilon_dominates(&near, &a, &MIN2, 1e-6));
        assert!(!epsilon_dominates(&[1.1, 2.0], &a, &MIN2, 1e-6));
    }

    #[test]
    fn surrogate_subtracts_maximized_objectives() {
        assert_eq!(scalar_surrogate(&[3.0, 2.0], &MIXED), 1.0);
        assert_eq!(scalar_surrogate(&[3.0, 2.0], &MIN2), 5.0);
    }
}
