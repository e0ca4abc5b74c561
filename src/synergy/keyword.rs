//! Keyword overlap between two categories.
//!
//! Jaccard similarity of the two keyword sets, plus a bonus for each synonym
//! group that both sets touch. Capped at 1.

use hashbrown::HashSet;

use crate::config::SynergyConfig;

/// Fixed synonym groups. A group counts when each side holds at least one member.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    &["創造", "革新", "変革", "改革", "革命", "確立"],
    &["調和", "協力", "団結", "結束", "平和", "統合", "結集", "集合"],
    &["成長", "発展", "向上", "上昇", "前進", "昇進", "増加", "漸進"],
    &["忍耐", "持続", "継続", "恒常", "永続", "着実"],
    &["困難", "障害", "苦境", "困窮", "危険", "逆境", "不屈"],
    &["リーダーシップ", "統率", "指導", "組織", "力", "強大", "威力"],
    &["安定", "静止", "節制", "調節", "適度", "抑制", "瞑想"],
    &["受容", "育成", "サポート", "養育", "滋養", "恵み", "供給"],
    &["決断", "実行", "突破", "決定", "解決", "除去"],
    &["成功", "繁栄", "豊穣", "達成", "完成", "大成", "充実", "栄光"],
    &["知恵", "智慧", "洞察", "観察", "理解", "学習", "探求", "光明"],
    &["柔軟", "適応", "従順", "浸透"],
    &["誠実", "信頼", "真心", "純真", "人徳"],
    &["歓喜", "楽しみ", "交流", "楽観", "活力"],
    &["再生", "復活", "回復", "修復", "再統合"],
];

/// Keyword score in [0, 1], or `None` when both sets are empty.
pub fn keyword_score(a: &[&str], b: &[&str], cfg: &SynergyConfig) -> Option<f64> {
    let sa: HashSet<&str> = a.iter().copied().collect();
    let sb: HashSet<&str> = b.iter().copied().collect();
    if sa.is_empty() && sb.is_empty() {
        return None;
    }

    let inter = sa.intersection(&sb).count() as f64;
    let union = sa.union(&sb).count() as f64;
    let jaccard = inter / union;

    let groups = SYNONYM_GROUPS
        .iter()
        .filter(|g| g.iter().any(|w| sa.contains(w)) && g.iter().any(|w| sb.contains(w)))
        .count() as f64;
    let bonus = (groups * cfg.synonym_bonus).min(cfg.synonym_bonus_cap);

    Some((jaccard + bonus).min(1.0))
}
