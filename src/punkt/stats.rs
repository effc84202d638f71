//! Log-likelihood ratios used to score abbreviations, collocations and sentence starters.

/// `a * ln(p) + b * ln(1 - p)`, or 0 when `p` is not a proper probability.
fn log_term(a: f64, b: f64, p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        0.0
    } else {
        a * p.ln() + b * (1.0 - p).ln()
    }
}

/// Dunning log-likelihood of a type being an abbreviation.
///
/// `count_a` is the count of the type (with and without period), `count_b` the
/// number of period-final tokens, `count_ab` the count of the type followed by a period
/// and `n` the total number of tokens.
///
/// The alternative hypothesis assumes that the period almost always (0.99) follows the type.
pub fn dunning_log_likelihood(count_a: f64, count_b: f64, count_ab: f64, n: f64) -> f64 {
    let p1 = count_b / n;
    let p2: f64 = 0.99;

    let null_hypo = count_ab * p1.ln() + (count_a - count_ab) * (1.0 - p1).ln();
    let alt_hypo = count_ab * p2.ln() + (count_a - count_ab) * (1.0 - p2).ln();

    -2.0 * (null_hypo - alt_hypo)
}

/// Log-likelihood ratio of `a` and `b` co-occurring, used for collocations and sentence starters.
pub fn col_log_likelihood(count_a: f64, count_b: f64, count_ab: f64, n: f64) -> f64 {
    let p = count_b / n;
    let p1 = count_ab / count_a;
    let p2 = if n - count_a == 0.0 {
        1.0
    } else {
        (count_b - count_ab) / (n - count_a)
    };

    let summand1 = log_term(count_ab, count_a - count_ab, p);
    let summand2 = log_term(count_b - count_ab, n - count_a - count_b + count_ab, p);
    let summand3 = if count_a == count_ab {
        0.0
    } else {
        log_term(count_ab, count_a - count_ab, p1)
    };
    let summand4 = if count_b == count_ab {
        0.0
    } else {
        log_term(count_b - count_ab, n - count_a - count_b + count_ab, p2)
    };

    -2.0 * (summand1 + summand2 - summand3 - summand4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dunning_favors_always_period_final() {
        // type seen 10 times, always with a period, in a 1000 token corpus with 50 periods
        let always = dunning_log_likelihood(10.0, 50.0, 10.0, 1000.0);
        // same type, with a period only half the time
        let half = dunning_log_likelihood(10.0, 50.0, 5.0, 1000.0);
        assert!(always > 0.0);
        assert!(always > half);
    }

    #[test]
    fn dunning_value() {
        // null: 10 * ln(0.05), alternative: 10 * ln(0.99)
        let ll = dunning_log_likelihood(10.0, 50.0, 10.0, 1000.0);
        let expected = -2.0 * (10.0 * 0.05f64.ln() - 10.0 * 0.99f64.ln());
        assert!((ll - expected).abs() < 1e-9);
    }

    #[test]
    fn col_is_finite_on_edges() {
        // count_a == n triggers the zero division fallback
        let ll = col_log_likelihood(100.0, 10.0, 5.0, 100.0);
        assert!(ll.is_finite());

        // count_a == count_ab and count_b == count_ab
        let ll = col_log_likelihood(5.0, 5.0, 5.0, 1000.0);
        assert!(ll.is_finite());
        assert!(ll > 0.0);
    }

    #[test]
    fn col_strong_association() {
        let strong = col_log_likelihood(20.0, 20.0, 18.0, 10_000.0);
        let weak = col_log_likelihood(20.0, 20.0, 1.0, 10_000.0);
        assert!(strong > weak);
    }
}
