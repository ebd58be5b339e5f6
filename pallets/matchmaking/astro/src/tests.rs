//! # 合盘引擎测试

use crate::relations::resolve;
use crate::tables::{classic_trines, PairTable};
use crate::*;
use frame_support::parameter_types;
use std::collections::BTreeSet;
use ChineseAnimal::*;
use WesternSign::*;

parameter_types! {
    pub const DefaultCap: Tier = Tier::Excellent;
    pub const StrictCap: Tier = Tier::VeryGood;
}

fn all_profiles() -> Vec<Profile> {
    WesternSign::ALL
        .iter()
        .flat_map(|west| ChineseAnimal::ALL.iter().map(move |animal| Profile::new(*west, *animal)))
        .collect()
}

#[test]
fn classify_is_total_over_all_inputs() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    let profiles = all_profiles();
    assert_eq!(profiles.len(), 144);

    for a in &profiles {
        for b in &profiles {
            let c = classifier.classify(a, b);
            assert!(c.reason.is_some());
            assert!(!c.badges.is_empty() || c.tier == Tier::Neutral);
            if let Some(Reason::Overlay(kind)) = c.reason {
                assert_eq!(c.tier, Tier::Difficult);
                assert_ne!(kind, OverlayKind::Clash);
            }
        }
    }
}

#[test]
fn classification_is_symmetric_with_permissive_overrides() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    let profiles = all_profiles();
    for a in &profiles {
        for b in &profiles {
            let ab = classifier.classify(a, b);
            let ba = classifier.classify(b, a);
            assert_eq!(ab.tier, ba.tier);
            assert_eq!(ab.score, ba.score);
        }
    }
}

#[test]
fn same_animal_is_always_good_friends() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    for animal in ChineseAnimal::ALL {
        for wa in WesternSign::ALL {
            for wb in WesternSign::ALL {
                // 包括 (Gemini, Rat) 这类强制规则组合
                let c = classifier.classify(&Profile::new(wa, animal), &Profile::new(wb, animal));
                assert_eq!(c.tier, Tier::GoodFriends);
                assert_eq!(c.score, Score::from_centi(50));
                assert_eq!(c.badges, vec![Badge::SameChineseSign]);
                assert_eq!(c.reason, Some(Reason::SameChineseSign));
            }
        }
    }
}

#[test]
fn override_takes_precedence() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    let c = classifier.classify(&Profile::new(Gemini, Rat), &Profile::new(Cancer, Dragon));
    assert_eq!(c.tier, Tier::Soulmate);
    assert_eq!(c.badge_labels(), vec!["Forced Override"]);
    assert_eq!(c.reason_text(), Some("Manual override / apex match"));
}

#[test]
fn override_matching_first_profile_is_directional() {
    let config = EngineConfig::classic().with_override_matching(OverrideMatching::FirstProfile);
    let classifier = TierClassifier::new(&config);
    let ox = Profile::new(Cancer, Ox);
    let dragon = Profile::new(Aries, Dragon);

    assert_eq!(classifier.classify(&dragon, &ox).tier, Tier::TwinFlame);
    // 反向不触发强制规则，落到丑辰相破
    let c = classifier.classify(&ox, &dragon);
    assert_eq!(c.tier, Tier::Difficult);
    assert_eq!(c.reason, Some(Reason::Overlay(OverlayKind::Break)));
}

#[test]
fn conflict_only_pairs_are_opposites_attract() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    let mut checked = 0;

    for aa in ChineseAnimal::ALL {
        for ab in ChineseAnimal::ALL {
            let flags = resolve(config.tables(), aa, ab);
            if !flags.conflict || flags.primary_difficult().is_some() {
                continue;
            }
            for wa in WesternSign::ALL {
                for wb in WesternSign::ALL {
                    let a = Profile::new(wa, aa);
                    let b = Profile::new(wb, ab);
                    if config.overrides().check(&a, &b, config.override_matching()).is_some() {
                        continue;
                    }
                    let c = classifier.classify(&a, &b);
                    assert_eq!(c.tier, Tier::OppositesAttract);
                    assert!(c.score >= Score::from_centi(300));
                    checked += 1;
                }
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn conflict_with_other_overlay_is_difficult() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    // 寅申：冲 + 刑
    let c = classifier.classify(&Profile::new(Leo, Tiger), &Profile::new(Gemini, Monkey));
    assert_eq!(c.tier, Tier::Difficult);
    assert_eq!(c.reason, Some(Reason::Overlay(OverlayKind::Punishment)));
}

#[test]
fn harm_outranks_break() {
    let tables = CLASSIC_TABLES.with_break(PairTable::from_pairs(&[(Ox, Horse)]));
    let config = EngineConfig::classic().with_tables(tables);
    let classifier = TierClassifier::new(&config);
    let c = classifier.classify(&Profile::new(Virgo, Ox), &Profile::new(Virgo, Horse));
    assert_eq!(c.tier, Tier::Difficult);
    assert_eq!(c.reason, Some(Reason::Overlay(OverlayKind::Harm)));
    assert_eq!(
        c.flags.chinese_difficult,
        Some(vec![OverlayKind::Harm, OverlayKind::Break, OverlayKind::Damage])
    );
}

#[test]
fn score_does_not_decide_tier() {
    // 三合 + 六合 + 同元素足以抵消六害扣分
    let pair = PairTable::from_pairs(&[(Rat, Dragon)]);
    let tables = RelationTables::empty().with_harm(pair).with_secret_friend(pair);
    let config = EngineConfig::classic()
        .with_tables(tables)
        .with_overrides(OverrideRegistry::default());
    let classifier = TierClassifier::new(&config);

    let c = classifier.classify(&Profile::new(Aries, Rat), &Profile::new(Leo, Dragon));
    // 3 + 2 - 3 - 3.5 + 2
    assert_eq!(c.score, Score::from_centi(50));
    assert!(c.score.is_positive());
    assert_eq!(c.tier, Tier::Difficult);
    assert_eq!(c.reason, Some(Reason::Overlay(OverlayKind::Harm)));
}

#[test]
fn trine_grouping_comes_from_tables() {
    let a = Profile::new(Leo, Ox);
    let b = Profile::new(Aries, Tiger);

    let config = EngineConfig::classic();
    let c = TierClassifier::new(&config).classify(&a, &b);
    assert_eq!(c.tier, Tier::GoodFriends);
    assert_eq!(c.reason, Some(Reason::LivelySupported));

    let mut trines = classic_trines();
    trines[Tiger as usize] = Trine::Strategists;
    let config = EngineConfig::classic().with_tables(CLASSIC_TABLES.with_trines(trines));
    let c = TierClassifier::new(&config).classify(&a, &b);
    assert_eq!(c.tier, Tier::Soulmate);
    assert!(c.has_badge(Badge::SameTrine));
}

#[test]
fn same_west_cap_only_applies_at_soulmate_step() {
    // 同星座必同元素，TwinFlame 永远不会出现同星座
    let config = EngineConfig::classic().with_same_west_cap(Tier::Neutral);
    let classifier = TierClassifier::new(&config);
    let profiles = all_profiles();
    for a in &profiles {
        for b in &profiles {
            let c = classifier.classify(a, b);
            if c.reason == Some(Reason::SameWestCap) {
                assert_eq!(a.west, b.west);
                assert_eq!(c.tier, Tier::Neutral);
                assert!(c.has_badge(Badge::SameTrine));
                assert!(c.has_badge(Badge::SameWestCapApplied));
            }
            if c.tier == Tier::TwinFlame && c.reason == Some(Reason::TwinFlame) {
                assert_ne!(a.west, b.west);
            }
        }
    }
}

#[test]
fn full_grid_covers_cross_product() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    let grid = generate_full_grid_for(&classifier, &Profile::new(Scorpio, Goat));

    assert_eq!(grid.len(), 144);
    let unique: BTreeSet<(u8, u8)> =
        grid.iter().map(|entry| (entry.west.index(), entry.animal.index())).collect();
    assert_eq!(unique.len(), 144);
}

#[test]
fn same_west_cap_comes_from_config() {
    let a = Profile::new(Taurus, Ox);
    let b = Profile::new(Taurus, Snake);

    let c = ClassicAstroClassifier::<DefaultCap>::classify(&a, &b);
    assert_eq!(c.tier, Tier::Excellent);
    assert!(c.has_badge(Badge::SameWestCapApplied));

    let c = ClassicAstroClassifier::<StrictCap>::classify(&a, &b);
    assert_eq!(c.tier, Tier::VeryGood);
    assert_eq!(c.reason, Some(Reason::SameWestCap));

    // 不同星座同元素不封顶
    let c = ClassicAstroClassifier::<StrictCap>::classify(&a, &Profile::new(Virgo, Snake));
    assert_eq!(c.tier, Tier::Soulmate);
}

#[test]
fn provider_grid_and_display() {
    let base = Profile::new(Aries, Tiger);
    let grid = ClassicAstroClassifier::<DefaultCap>::full_grid(&base);
    assert_eq!(grid.len(), 144);

    let display = ClassicAstroClassifier::<DefaultCap>::display(&base, &Profile::new(Leo, Horse));
    assert_eq!(display.rank, RankKey::Perfect);
}

#[test]
fn display_percentages_are_bounded() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    let profiles = all_profiles();
    for a in &profiles {
        for b in &profiles {
            let c = classifier.classify(a, b);
            let display = MatchDisplay::from_classification(&c, a, b);
            assert!(display.percentage <= 100);
            if c.tier == Tier::OppositesAttract && a.animal != b.animal {
                assert!(display.percentage > 60);
            }
        }
    }
}

#[test]
fn boundary_parsing_round_trips() {
    for west in WesternSign::ALL {
        for animal in ChineseAnimal::ALL {
            let profile = Profile::parse(&west.to_string(), &animal.to_string().to_uppercase());
            assert_eq!(profile, Ok(Profile::new(west, animal)));
        }
    }
    assert_eq!(Profile::parse("Aries", "Cat"), Err(ParseError::UnknownChineseAnimal));
    assert_eq!(Profile::parse("Serpentarius", "Cat"), Err(ParseError::UnknownWesternSign));
}

#[test]
fn classification_serializes_to_json() {
    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    let c = classifier.classify(&Profile::new(Leo, Tiger), &Profile::new(Leo, Snake));

    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["tier"], "difficult");
    assert_eq!(json["flags"]["chinese_difficult"][0], "harm");

    let decoded: Classification = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, c);
}

#[test]
fn classification_scale_encodes() {
    use codec::{Decode, Encode};

    let config = EngineConfig::classic();
    let classifier = TierClassifier::new(&config);
    let c = classifier.classify(&Profile::new(Taurus, Rat), &Profile::new(Cancer, Horse));
    let bytes = c.encode();
    assert_eq!(Classification::decode(&mut &bytes[..]).unwrap(), c);
}
