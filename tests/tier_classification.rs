use overlap_core::document::Document;
use overlap_core::report::{AuditReporter, Recommendations, RedundancyTier};

#[test]
fn invariant_tier_boundaries() {
    assert_eq!(RedundancyTier::classify(0.70), RedundancyTier::Moderate);
    assert_eq!(RedundancyTier::classify(0.71), RedundancyTier::High);
    assert_eq!(RedundancyTier::classify(0.40), RedundancyTier::Low);
    assert_eq!(RedundancyTier::classify(0.41), RedundancyTier::Moderate);
}

#[test]
fn invariant_tier_extremes() {
    assert_eq!(RedundancyTier::classify(1.0), RedundancyTier::High);
    assert_eq!(RedundancyTier::classify(0.0), RedundancyTier::Low);
}

#[test]
fn tier_serializes_uppercase() {
    let json = serde_json::to_string(&RedundancyTier::Moderate).unwrap();
    assert_eq!(json, "\"MODERATE\"");

    let parsed: RedundancyTier = serde_json::from_str("\"HIGH\"").unwrap();
    assert_eq!(parsed, RedundancyTier::High);
    assert_eq!(RedundancyTier::Low.to_string(), "LOW");
}

#[test]
fn every_tier_has_recommendations() {
    let recommendations = Recommendations::default();
    for tier in [RedundancyTier::High, RedundancyTier::Moderate, RedundancyTier::Low] {
        assert!(!recommendations.for_tier(tier).is_empty(), "no items for {tier}");
    }
    assert!(RedundancyTier::High.needs_action());
    assert!(!RedundancyTier::Low.needs_action());
}

#[test]
fn report_uses_recommendations_for_its_tier() {
    let reporter = AuditReporter::default();
    let a = Document::from_text("a", "alpha");
    let b = Document::from_text("b", "beta");

    let high = reporter.build_report(&a, &b, 0.9, Vec::new());
    assert_eq!(high.tier, RedundancyTier::High);
    assert_eq!(high.recommendation, Recommendations::default().high);
    assert_eq!(high.recommendation[0], "Designate one document as the single source of truth");

    let low = reporter.build_report(&a, &b, 0.1, Vec::new());
    assert_eq!(low.tier, RedundancyTier::Low);
    assert_eq!(low.recommendation, Recommendations::default().low);
    assert!(low.scan.is_none());
}

#[test]
fn caller_supplied_wording_is_used_verbatim() {
    let custom = Recommendations::new(
        vec!["Fusionner les pages".to_string()],
        vec!["Ajouter des renvois".to_string(), "Revoir les sections".to_string()],
        vec!["Rien à faire".to_string()],
    );
    let reporter = AuditReporter::new(custom);
    let a = Document::from_text("a", "alpha");
    let b = Document::from_text("b", "beta");

    let report = reporter.build_report(&a, &b, 0.55, Vec::new());
    assert_eq!(report.tier, RedundancyTier::Moderate);
    assert_eq!(
        report.recommendation,
        vec!["Ajouter des renvois".to_string(), "Revoir les sections".to_string()]
    );
}

#[test]
fn reporting_is_pure() {
    let reporter = AuditReporter::default();
    let a = Document::from_text("a", "alpha\nbeta");
    let b = Document::from_text("b", "alpha\ngamma");

    let first = reporter.build_report(&a, &b, 0.5, Vec::new());
    let second = reporter.build_report(&a, &b, 0.5, Vec::new());
    assert_eq!(first, second);
    assert_eq!(first.source.line_count, 2);
    assert_eq!(first.target.char_count, 11);
}
