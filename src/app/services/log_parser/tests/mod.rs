//! Test fixtures for Vina log parser testing
//!
//! This module provides sample log texts covering the table layouts observed
//! across Vina releases, shared by the per-component test modules.


/// Complete log with a single-line header; the best-mode row sits two lines
/// below the header (header, border, row)
pub fn single_line_header_log() -> String {
    r#"#################################################################
# If you used AutoDock Vina in your work, please cite:          #
#################################################################

Detected 8 CPUs
Reading input ... done.
Setting up the scoring function ... done.
Analyzing the binding site ... done.
Using random seed: 1917492720
Performing search ... done.
Refining results ... done.

mode |   affinity | rmsd l.b.| rmsd u.b.
-----+------------+----------+----------
   1         -7.2      0.000      0.000
   2         -6.9      1.513      2.842
   3         -6.4      2.101      3.305
Writing output ... done.
"#
    .to_string()
}

/// Log whose header carries all column names but keeps units on a separate
/// line; the best-mode row sits three lines below the header
pub fn three_line_offset_log() -> String {
    r#"Performing search ... done.
Refining results ... done.

mode |   affinity | rmsd l.b. | rmsd u.b.
     | (kcal/mol) |           |
-----+------------+-----------+-----------
   1         -8.1      0.000       0.000
   2         -7.7      1.902       2.511
"#
    .to_string()
}

/// Log with a two-line header: the first line lacks the rmsd tokens, so the
/// line-oriented scan cannot recognize it and the pattern match must
pub fn two_line_header_log() -> String {
    r#"Refining results ... done.

mode |   affinity | dist from best mode
     | (kcal/mol) | rmsd l.b.| rmsd u.b.
-----+------------+----------+----------
   1       -7.9      0.000      0.000
   2       -7.3      2.115      4.284
"#
    .to_string()
}

/// Log text with no results table at all
pub fn no_table_log() -> String {
    r#"Detected 8 CPUs
Reading input ... done.
An error occurred: insufficient memory
"#
    .to_string()
}

/// Log whose best-mode row carries an unparsable affinity field
pub fn malformed_row_log() -> String {
    r#"mode |   affinity | rmsd l.b.| rmsd u.b.
-----+------------+----------+----------
   1       abc      0.000      0.000
"#
    .to_string()
}

/// Minimal parseable log with the given affinity, for batch fixtures
pub fn minimal_log(affinity: f64) -> String {
    format!(
        "mode |   affinity | rmsd l.b.| rmsd u.b.\n\
         -----+------------+----------+----------\n\
            1       {:.1}      0.000      0.000\n",
        affinity
    )
}
