// src/dosing.rs

//! Static dosing advice derived from the latest reading.
//!
//! The amounts are fixed product literals keyed by threshold; nothing here is
//! computed from tank volume or the measured values.

use crate::models::LogEntry;

const PH_LOW: f64 = 6.5;
const PH_HIGH: f64 = 7.5;
const AMMONIA_SEVERE: f64 = 0.5;
const NITRATE_HIGH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    BufferUp,
    BufferDown,
    MaintainPh,
    Conditioner,
    LargeWaterChange,
    BacterialSupplement,
    SmallWaterChange,
    DailySupplement,
}

impl Advice {
    pub fn text(self) -> &'static str {
        match self {
            Advice::BufferUp => "Add Seachem Alkaline Buffer: 1/4 tsp (1.5g)",
            Advice::BufferDown => "Add Seachem Acid Buffer: 1/8 tsp (0.75g)",
            Advice::MaintainPh => "Maintain pH, no adjustment needed",
            Advice::Conditioner => "Add Seachem Prime: 5mL (1 capful) per 50 gallons",
            Advice::LargeWaterChange => "50% water change recommended",
            Advice::BacterialSupplement => {
                "Add Seachem Stability: 5mL per 10 gallons on Days 1, 3, 7, 14"
            }
            Advice::SmallWaterChange => "20% water change recommended",
            Advice::DailySupplement => {
                "Daily: Seachem Flourish Excel: 5mL (1 capful) per 50 gallons or 2 drops per gallon"
            }
        }
    }
}

/// 按固定顺序返回触发的建议；没有记录时为空
pub fn advice(entry: Option<&LogEntry>) -> Vec<Advice> {
    let Some(entry) = entry else {
        return Vec::new();
    };

    let mut recs = Vec::new();

    // pH 三选一
    if entry.ph < PH_LOW {
        recs.push(Advice::BufferUp);
    } else if entry.ph > PH_HIGH {
        recs.push(Advice::BufferDown);
    } else {
        recs.push(Advice::MaintainPh);
    }

    if entry.ammonia > 0.0 {
        recs.push(Advice::Conditioner);
    }
    if entry.ammonia > AMMONIA_SEVERE {
        recs.push(Advice::LargeWaterChange);
    }
    if entry.nitrite > 0.0 {
        recs.push(Advice::BacterialSupplement);
    }
    if entry.nitrate > NITRATE_HIGH {
        recs.push(Advice::SmallWaterChange);
    }

    recs.push(Advice::DailySupplement);
    recs
}

/// Renders the advice as `- ` prefixed lines. Empty string when there is no entry.
pub fn recommend(entry: Option<&LogEntry>) -> String {
    advice(entry)
        .into_iter()
        .map(|a| format!("- {}", a.text()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ph: f64, ammonia: f64, nitrite: f64, nitrate: f64) -> LogEntry {
        LogEntry {
            date: "6/1/2026".to_string(),
            ph,
            ammonia,
            nitrite,
            nitrate,
            notes: None,
        }
    }

    #[test]
    fn no_entry_gives_empty_recommendation() {
        assert_eq!(recommend(None), "");
        assert!(advice(None).is_empty());
    }

    #[test]
    fn healthy_tank_only_maintains_and_doses_daily() {
        let recs = recommend(Some(&entry(7.0, 0.0, 0.0, 0.0)));
        assert_eq!(
            recs,
            "- Maintain pH, no adjustment needed\n\
             - Daily: Seachem Flourish Excel: 5mL (1 capful) per 50 gallons or 2 drops per gallon"
        );
        assert!(!recs.contains("water change"));
    }

    #[test]
    fn low_ph_buffers_up() {
        let recs = advice(Some(&entry(6.0, 0.0, 0.0, 0.0)));
        assert!(recs.contains(&Advice::BufferUp));
        assert!(!recs.contains(&Advice::MaintainPh));
        assert!(!recs.contains(&Advice::BufferDown));
    }

    #[test]
    fn high_ph_buffers_down() {
        let recs = recommend(Some(&entry(8.0, 0.0, 0.0, 0.0)));
        assert!(recs.contains("Add Seachem Acid Buffer: 1/8 tsp (0.75g)"));
        assert!(!recs.contains("Maintain pH"));
    }

    #[test]
    fn ph_chain_boundaries_maintain() {
        for ph in [6.5, 7.5] {
            assert_eq!(advice(Some(&entry(ph, 0.0, 0.0, 0.0)))[0], Advice::MaintainPh);
        }
    }

    #[test]
    fn severe_ammonia_adds_conditioner_and_large_change() {
        let recs = recommend(Some(&entry(7.0, 0.6, 0.0, 0.0)));
        assert!(recs.contains("Add Seachem Prime: 5mL (1 capful) per 50 gallons"));
        assert!(recs.contains("50% water change recommended"));
    }

    #[test]
    fn mild_ammonia_only_conditions() {
        let recs = advice(Some(&entry(7.0, 0.5, 0.0, 0.0)));
        assert!(recs.contains(&Advice::Conditioner));
        assert!(!recs.contains(&Advice::LargeWaterChange));
    }

    #[test]
    fn nitrite_triggers_bacterial_schedule() {
        let recs = recommend(Some(&entry(7.0, 0.0, 0.25, 0.0)));
        assert!(recs.contains("Days 1, 3, 7, 14"));
    }

    #[test]
    fn nitrate_threshold() {
        assert!(recommend(Some(&entry(7.0, 0.0, 0.0, 25.0))).contains("20% water change recommended"));
        assert!(!recommend(Some(&entry(7.0, 0.0, 0.0, 15.0))).contains("20% water change"));
        assert!(!recommend(Some(&entry(7.0, 0.0, 0.0, 20.0))).contains("20% water change"));
    }

    #[test]
    fn everything_wrong_keeps_rule_order() {
        let recs = advice(Some(&entry(6.0, 1.0, 1.0, 40.0)));
        assert_eq!(
            recs,
            vec![
                Advice::BufferUp,
                Advice::Conditioner,
                Advice::LargeWaterChange,
                Advice::BacterialSupplement,
                Advice::SmallWaterChange,
                Advice::DailySupplement,
            ]
        );
    }

    #[test]
    fn daily_line_is_last_without_trailing_newline() {
        let recs = recommend(Some(&entry(8.2, 0.0, 0.0, 30.0)));
        assert!(recs.ends_with("2 drops per gallon"));
        assert!(!recs.ends_with('\n'));
    }
}
