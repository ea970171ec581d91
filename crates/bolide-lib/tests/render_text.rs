use bolide_lib::ImpactReport;

#[test]
fn render_text_matches_the_canonical_layout() {
    let report = ImpactReport::compute().expect("report computes");
    let text = report.render_text();

    // The fixed-point factor line depends on float formatting of a value
    // near 1.402688e12, so it is rendered from the report itself.
    let factor_fixed = format!("{:<30}  {:.1}", "Difference factor (x):", report.difference_factor);

    let expected = format!(
        concat!(
            "\n",
            " ---------------------------------------------------------------\n",
            " Results:\n",
            " ---------------------------------------------------------------\n",
            " 10-megaton bomb KE (erg):       4.20E23\n",
            "\n",
            " 1-km C-type asteroid KE (erg):  4.53E26\n",
            "                         (ton):  1.26E10\n",
            " 1-km S-type asteroid KE (erg):  8.90E26\n",
            "                         (ton):  2.47E10\n",
            " 1-km M-type asteroid KE (erg):  1.75E27\n",
            "                         (ton):  4.85E10\n",
            "\n",
            " 1-km mean asteroid KE (erg):    1.03E27\n",
            "                       (ton):    2.86E10\n",
            "\n",
            " Ceres asteroid KE (erg):        5.89E35\n",
            "                   (ton):        1.64E19\n",
            " {factor_fixed}\n",
            " Difference factor (x):          1.40E12\n",
            " ---------------------------------------------------------------\n",
        ),
        factor_fixed = factor_fixed
    );

    assert_eq!(text, expected);
}

#[test]
fn render_text_aligns_ton_tags_under_erg_tags() {
    let text = ImpactReport::compute()
        .expect("report computes")
        .render_text();
    let lines: Vec<&str> = text.lines().collect();

    let mut ton_lines = 0;
    for pair in lines.windows(2) {
        if let (Some(erg_col), Some(ton_col)) = (pair[0].find("(erg):"), pair[1].find("(ton):")) {
            assert_eq!(ton_col, erg_col, "ton tag misaligned after {:?}", pair[0]);
            ton_lines += 1;
        }
    }

    // C, S, M, mean and Ceres each carry a ton-equivalent line.
    assert_eq!(ton_lines, 5);
}

#[test]
fn render_text_keeps_values_in_one_column() {
    let text = ImpactReport::compute()
        .expect("report computes")
        .render_text();

    let mut value_lines = 0;
    for line in text.lines() {
        if !line.contains("):") {
            continue;
        }
        let bytes = line.as_bytes();
        assert!(bytes.len() > 33, "short value line {:?}", line);
        assert_eq!(bytes[32], b' ', "missing separator in {:?}", line);
        assert!(bytes[33].is_ascii_digit(), "value out of column in {:?}", line);
        value_lines += 1;
    }

    // One value line per labelled row: bomb, three class pairs, the mean
    // pair, the Ceres pair and both difference-factor notations.
    assert_eq!(value_lines, 13);
}
