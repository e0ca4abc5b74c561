//! Built-in 64-category table and the optimizer's trigram-pair matrix.

use crate::trigram::Trigram;

/// Static form of one catalog record.
pub(crate) struct CategoryRow {
    pub id: u8,
    pub name: &'static str,
    pub reading: &'static str,
    pub upper: Trigram,
    pub lower: Trigram,
    pub keywords: &'static [&'static str],
    pub tagline: &'static str,
    pub description: &'static str,
}

/// Separately maintained (upper, lower) → category matrix, rows and columns in
/// canonical trigram order.
///
/// This is *not* the table behind [`super::lookup`]. It repeats nine ids and
/// omits ten, and disagrees with the catalog's own trigram pairs in
/// many cells. Only the energy-balance optimizer reads it.
pub const AUTHENTIC_MATRIX: [[u8; 8]; 8] = [
    [1, 43, 14, 34, 9, 5, 26, 11],
    [58, 60, 38, 54, 61, 59, 28, 19],
    [50, 64, 56, 62, 55, 63, 35, 8],
    [51, 16, 40, 32, 46, 48, 18, 7],
    [57, 20, 53, 42, 37, 45, 22, 36],
    [6, 29, 4, 7, 59, 60, 3, 2],
    [33, 52, 39, 15, 53, 56, 31, 12],
    [2, 47, 4, 7, 46, 29, 27, 24],
];

pub(crate) static CATEGORY_ROWS: [CategoryRow; 64] = [
    CategoryRow {
        id: 1,
        name: "乾為天",
        reading: "けんいてん",
        upper: Trigram::Qian,
        lower: Trigram::Qian,
        keywords: &["創造", "リーダーシップ", "力"],
        tagline: "天翔ける龍のような、天性のリーダー",
        description: "あなたの心の奥底には、天を翔ける龍のような壮大なエネルギーが宿っています。新しい道を切り開き、人々を導くことに最も価値を見出すあなたは、生まれながらのリーダーです。",
    },
    CategoryRow {
        id: 2,
        name: "坤為地",
        reading: "こんいち",
        upper: Trigram::Kun,
        lower: Trigram::Kun,
        keywords: &["受容", "育成", "サポート"],
        tagline: "大地の母のように、すべてを受け入れる人",
        description: "あなたの心には、大地のような広大で深い包容力が備わっています。人や物事を育み、支えることに最も喜びを感じるあなたは、周囲にとって欠かせない存在です。",
    },
    CategoryRow {
        id: 3,
        name: "水雷屯",
        reading: "すいらいちゅん",
        upper: Trigram::Kan,
        lower: Trigram::Zhen,
        keywords: &["始まり", "困難", "成長"],
        tagline: "困難を乗り越える力強い意志",
        description: "新しい始まりには困難が伴いますが、あなたにはそれを乗り越える強い意志があります。",
    },
    CategoryRow {
        id: 4,
        name: "山水蒙",
        reading: "さんすいもう",
        upper: Trigram::Gen,
        lower: Trigram::Kan,
        keywords: &["学習", "成長", "探求"],
        tagline: "学びと成長の探求者",
        description: "知識を求め、成長し続けることがあなたの本質です。",
    },
    CategoryRow {
        id: 5,
        name: "水天需",
        reading: "すいてんじゅ",
        upper: Trigram::Kan,
        lower: Trigram::Qian,
        keywords: &["忍耐", "タイミング", "準備"],
        tagline: "忍耐強く機会を待つ人",
        description: "適切なタイミングを見極める智慧があります。",
    },
    CategoryRow {
        id: 6,
        name: "天水訟",
        reading: "てんすいしょう",
        upper: Trigram::Qian,
        lower: Trigram::Kan,
        keywords: &["正義", "対立", "解決"],
        tagline: "正義を求める勇気ある人",
        description: "正しいことのために立ち上がる勇気があります。",
    },
    CategoryRow {
        id: 7,
        name: "地水師",
        reading: "ちすいし",
        upper: Trigram::Kun,
        lower: Trigram::Kan,
        keywords: &["リーダーシップ", "組織", "統率"],
        tagline: "組織を率いるリーダー",
        description: "チームを統率し目標達成に導く力があります。",
    },
    CategoryRow {
        id: 8,
        name: "水地比",
        reading: "すいちひ",
        upper: Trigram::Kan,
        lower: Trigram::Kun,
        keywords: &["調和", "協力", "結束"],
        tagline: "調和と協力を重視する人",
        description: "他者との調和を大切にし、協力関係を築くのが得意です。",
    },
    CategoryRow {
        id: 9,
        name: "風天小畜",
        reading: "ふうてんしょうちく",
        upper: Trigram::Xun,
        lower: Trigram::Qian,
        keywords: &["蓄積", "配慮", "着実"],
        tagline: "細やかな配慮で成果を積み重ねる人",
        description: "小さな努力を積み重ねて大きな成果を生み出します。",
    },
    CategoryRow {
        id: 10,
        name: "天沢履",
        reading: "てんたくり",
        upper: Trigram::Qian,
        lower: Trigram::Dui,
        keywords: &["礼儀", "品格", "正道"],
        tagline: "礼儀と品格を重んじる人",
        description: "正しい道を歩み、品格を保つことを大切にします。",
    },
    CategoryRow {
        id: 11,
        name: "地天泰",
        reading: "ちてんたい",
        upper: Trigram::Kun,
        lower: Trigram::Qian,
        keywords: &["平和", "繁栄", "調和"],
        tagline: "平和と繁栄をもたらす人",
        description: "調和とバランスにより平和と繁栄を実現します。",
    },
    CategoryRow {
        id: 12,
        name: "天地否",
        reading: "てんちひ",
        upper: Trigram::Qian,
        lower: Trigram::Kun,
        keywords: &["逆境", "忍耐", "転換"],
        tagline: "困難な時期を乗り越える忍耐力",
        description: "逆境に屈せず、時期を待つ智慧があります。",
    },
    CategoryRow {
        id: 13,
        name: "天火同人",
        reading: "てんかどうじん",
        upper: Trigram::Qian,
        lower: Trigram::Li,
        keywords: &["団結", "協力", "調和"],
        tagline: "人々を団結させる調和の力",
        description: "共通の目標に向かって人々を結束させる力があります。",
    },
    CategoryRow {
        id: 14,
        name: "火天大有",
        reading: "かてんだいゆう",
        upper: Trigram::Li,
        lower: Trigram::Qian,
        keywords: &["成功", "豊穣", "繁栄"],
        tagline: "豊かさと成功を手にする人",
        description: "大きな成果と豊かさを実現する力があります。",
    },
    CategoryRow {
        id: 15,
        name: "地山謙",
        reading: "ちざんけん",
        upper: Trigram::Kun,
        lower: Trigram::Gen,
        keywords: &["謙遜", "信頼", "人徳"],
        tagline: "謙虚さで人々から信頼される人",
        description: "謙虚な姿勢で多くの人から慕われます。",
    },
    CategoryRow {
        id: 16,
        name: "雷地豫",
        reading: "らいちよ",
        upper: Trigram::Zhen,
        lower: Trigram::Kun,
        keywords: &["歓喜", "活力", "楽観"],
        tagline: "喜びと活力をもたらす人",
        description: "周囲に喜びと前向きな活力を広げます。",
    },
    CategoryRow {
        id: 17,
        name: "沢雷随",
        reading: "たくらいずい",
        upper: Trigram::Dui,
        lower: Trigram::Zhen,
        keywords: &["適応", "従順", "成長"],
        tagline: "柔軟に適応し成長する人",
        description: "変化に柔軟に適応し、成長を続けます。",
    },
    CategoryRow {
        id: 18,
        name: "山風蠱",
        reading: "さんぷうこ",
        upper: Trigram::Gen,
        lower: Trigram::Xun,
        keywords: &["改革", "再生", "修復"],
        tagline: "改革と再生をもたらす人",
        description: "古い問題を解決し、新しい秩序を築きます。",
    },
    CategoryRow {
        id: 19,
        name: "地沢臨",
        reading: "ちたくりん",
        upper: Trigram::Kun,
        lower: Trigram::Dui,
        keywords: &["指導", "接近", "親近"],
        tagline: "人に寄り添い導く人",
        description: "人々に寄り添い、優しく導く力があります。",
    },
    CategoryRow {
        id: 20,
        name: "風地観",
        reading: "ふうちかん",
        upper: Trigram::Xun,
        lower: Trigram::Kun,
        keywords: &["観察", "洞察", "理解"],
        tagline: "深い洞察で本質を見抜く人",
        description: "物事の本質を見抜く深い洞察力があります。",
    },
    CategoryRow {
        id: 21,
        name: "火雷噬嗑",
        reading: "からいぜいごう",
        upper: Trigram::Li,
        lower: Trigram::Zhen,
        keywords: &["正義", "決断", "実行"],
        tagline: "正義を貫く強い意志の人",
        description: "困難を噛み砕き、正義を実現します。",
    },
    CategoryRow {
        id: 22,
        name: "山火賁",
        reading: "さんかひ",
        upper: Trigram::Gen,
        lower: Trigram::Li,
        keywords: &["美", "装飾", "調和"],
        tagline: "美と調和で人を魅了する人",
        description: "美的センスと調和で人々を魅了します。",
    },
    CategoryRow {
        id: 23,
        name: "山地剥",
        reading: "さんちはく",
        upper: Trigram::Gen,
        lower: Trigram::Kun,
        keywords: &["忍耐", "剥落", "衰退"],
        tagline: "困難な時期を耐え抜く人",
        description: "厳しい状況でも忍耐強く耐え抜きます。",
    },
    CategoryRow {
        id: 24,
        name: "地雷復",
        reading: "ちらいふく",
        upper: Trigram::Kun,
        lower: Trigram::Zhen,
        keywords: &["復活", "再生", "回復"],
        tagline: "新たな始まりを切り開く人",
        description: "困難の後に新しい始まりをもたらします。",
    },
    CategoryRow {
        id: 25,
        name: "天雷无妄",
        reading: "てんらいむぼう",
        upper: Trigram::Qian,
        lower: Trigram::Zhen,
        keywords: &["純真", "自然", "誠実"],
        tagline: "自然体で真実を貫く人",
        description: "偽りなく、自然体で真実を貫きます。",
    },
    CategoryRow {
        id: 26,
        name: "山天大畜",
        reading: "さんてんだいちく",
        upper: Trigram::Gen,
        lower: Trigram::Qian,
        keywords: &["蓄積", "抑制", "大成"],
        tagline: "力を蓄え大きな成果を上げる人",
        description: "エネルギーを蓄積し、大きな成果を実現します。",
    },
    CategoryRow {
        id: 27,
        name: "山雷頤",
        reading: "さんらいい",
        upper: Trigram::Gen,
        lower: Trigram::Zhen,
        keywords: &["養育", "滋養", "成長"],
        tagline: "滋養と成長を促す人",
        description: "自分と他者の成長を大切に育みます。",
    },
    CategoryRow {
        id: 28,
        name: "沢風大過",
        reading: "たくふうだいか",
        upper: Trigram::Dui,
        lower: Trigram::Xun,
        keywords: &["過剰", "大胆", "挑戦"],
        tagline: "大胆な挑戦をする人",
        description: "常識を超える大胆な挑戦をします。",
    },
    CategoryRow {
        id: 29,
        name: "坎為水",
        reading: "かんいすい",
        upper: Trigram::Kan,
        lower: Trigram::Kan,
        keywords: &["危険", "困難", "不屈"],
        tagline: "困難を乗り越える不屈の人",
        description: "どんな困難も諦めずに乗り越えます。",
    },
    CategoryRow {
        id: 30,
        name: "離為火",
        reading: "りいか",
        upper: Trigram::Li,
        lower: Trigram::Li,
        keywords: &["光明", "知恵", "照明"],
        tagline: "明るさで周囲を照らす人",
        description: "知恵と明るさで周囲を照らします。",
    },
    CategoryRow {
        id: 31,
        name: "沢山咸",
        reading: "たくざんかん",
        upper: Trigram::Dui,
        lower: Trigram::Gen,
        keywords: &["感応", "影響", "結合"],
        tagline: "感化し合う深い絆を築く人",
        description: "相互に影響し合う深い関係を築きます。",
    },
    CategoryRow {
        id: 32,
        name: "雷風恒",
        reading: "らいふうこう",
        upper: Trigram::Zhen,
        lower: Trigram::Xun,
        keywords: &["持続", "恒常", "永続"],
        tagline: "持続する力で目標を達成する人",
        description: "継続する力で長期的な成功を収めます。",
    },
    CategoryRow {
        id: 33,
        name: "天山遯",
        reading: "てんざんとん",
        upper: Trigram::Qian,
        lower: Trigram::Gen,
        keywords: &["退避", "隠遁", "時機"],
        tagline: "適切な時期を見極め退く智慧の人",
        description: "引き際を知る智慧で身を守ります。",
    },
    CategoryRow {
        id: 34,
        name: "雷天大壮",
        reading: "らいてんだいそう",
        upper: Trigram::Zhen,
        lower: Trigram::Qian,
        keywords: &["強大", "威力", "前進"],
        tagline: "力強さで道を切り開く人",
        description: "強大な力で新しい道を切り開きます。",
    },
    CategoryRow {
        id: 35,
        name: "火地晋",
        reading: "かちしん",
        upper: Trigram::Li,
        lower: Trigram::Kun,
        keywords: &["前進", "昇進", "発展"],
        tagline: "着実に前進し成功する人",
        description: "着実な歩みで確実に成功を掴みます。",
    },
    CategoryRow {
        id: 36,
        name: "地火明夷",
        reading: "ちかめいい",
        upper: Trigram::Kun,
        lower: Trigram::Li,
        keywords: &["隠蔽", "忍耐", "内光"],
        tagline: "困難な時期を智慧で乗り切る人",
        description: "暗い時期も内なる光で乗り越えます。",
    },
    CategoryRow {
        id: 37,
        name: "風火家人",
        reading: "ふうかかじん",
        upper: Trigram::Xun,
        lower: Trigram::Li,
        keywords: &["家族", "親密", "絆"],
        tagline: "家族や仲間を大切にする人",
        description: "身近な人との関係を最も大切にします。",
    },
    CategoryRow {
        id: 38,
        name: "火沢睽",
        reading: "かたくけい",
        upper: Trigram::Li,
        lower: Trigram::Dui,
        keywords: &["対立", "乖離", "和解"],
        tagline: "違いを乗り越え和解する人",
        description: "対立や違いを乗り越えて和解をもたらします。",
    },
    CategoryRow {
        id: 39,
        name: "水山蹇",
        reading: "すいざんけん",
        upper: Trigram::Kan,
        lower: Trigram::Gen,
        keywords: &["障害", "困難", "解決"],
        tagline: "困難を智慧で解決する人",
        description: "困難な状況を智慧と工夫で乗り越えます。",
    },
    CategoryRow {
        id: 40,
        name: "雷水解",
        reading: "らいすいかい",
        upper: Trigram::Zhen,
        lower: Trigram::Kan,
        keywords: &["解放", "解決", "開放"],
        tagline: "問題を解決し開放をもたらす人",
        description: "複雑な問題を解決し、解放をもたらします。",
    },
    CategoryRow {
        id: 41,
        name: "山沢損",
        reading: "さんたくそん",
        upper: Trigram::Gen,
        lower: Trigram::Dui,
        keywords: &["損失", "犠牲", "利他"],
        tagline: "犠牲を払い他者を助ける人",
        description: "自らを犠牲にして他者の利益を図ります。",
    },
    CategoryRow {
        id: 42,
        name: "風雷益",
        reading: "ふうらいえき",
        upper: Trigram::Xun,
        lower: Trigram::Zhen,
        keywords: &["利益", "成長", "増加"],
        tagline: "利益をもたらし成長を促す人",
        description: "周囲に利益をもたらし、共に成長します。",
    },
    CategoryRow {
        id: 43,
        name: "沢天夬",
        reading: "たくてんかい",
        upper: Trigram::Dui,
        lower: Trigram::Qian,
        keywords: &["決断", "突破", "除去"],
        tagline: "決断力で障害を突破する人",
        description: "的確な判断で困難を突破します。",
    },
    CategoryRow {
        id: 44,
        name: "天風姤",
        reading: "てんぷうこう",
        upper: Trigram::Qian,
        lower: Trigram::Xun,
        keywords: &["出会い", "邂逅", "機会"],
        tagline: "偶然の出会いを活かす人",
        description: "思いがけない出会いを大切にし活かします。",
    },
    CategoryRow {
        id: 45,
        name: "沢地萃",
        reading: "たくちすい",
        upper: Trigram::Dui,
        lower: Trigram::Kun,
        keywords: &["集合", "結集", "統合"],
        tagline: "人々を集め結束させる人",
        description: "多くの人を集めて大きな力を作ります。",
    },
    CategoryRow {
        id: 46,
        name: "地風升",
        reading: "ちふうしょう",
        upper: Trigram::Kun,
        lower: Trigram::Xun,
        keywords: &["上昇", "昇進", "向上"],
        tagline: "着実に向上し成長する人",
        description: "地道な努力で着実に地位を向上させます。",
    },
    CategoryRow {
        id: 47,
        name: "沢水困",
        reading: "たくすいこん",
        upper: Trigram::Dui,
        lower: Trigram::Kan,
        keywords: &["困窮", "苦境", "忍耐"],
        tagline: "困窮を乗り越える強靭な人",
        description: "厳しい困窮状態も諦めずに乗り越えます。",
    },
    CategoryRow {
        id: 48,
        name: "水風井",
        reading: "すいふうせい",
        upper: Trigram::Kan,
        lower: Trigram::Xun,
        keywords: &["源泉", "供給", "恵み"],
        tagline: "智慧の源で人を潤す人",
        description: "豊かな智慧で多くの人を潤します。",
    },
    CategoryRow {
        id: 49,
        name: "沢火革",
        reading: "たくかかく",
        upper: Trigram::Dui,
        lower: Trigram::Li,
        keywords: &["革命", "変革", "改革"],
        tagline: "革新的な変化をもたらす人",
        description: "古いものを変革し、新しい時代を築きます。",
    },
    CategoryRow {
        id: 50,
        name: "火風鼎",
        reading: "かふうてい",
        upper: Trigram::Li,
        lower: Trigram::Xun,
        keywords: &["確立", "秩序", "文化"],
        tagline: "新秩序を確立する人",
        description: "新しい秩序と文化を確立します。",
    },
    CategoryRow {
        id: 51,
        name: "震為雷",
        reading: "しんいらい",
        upper: Trigram::Zhen,
        lower: Trigram::Zhen,
        keywords: &["震動", "驚愕", "覚醒"],
        tagline: "衝撃的な変化で覚醒させる人",
        description: "強い衝撃で人々を目覚めさせます。",
    },
    CategoryRow {
        id: 52,
        name: "艮為山",
        reading: "ごんいざん",
        upper: Trigram::Gen,
        lower: Trigram::Gen,
        keywords: &["静止", "安定", "瞑想"],
        tagline: "静寂な安定で心を鎮める人",
        description: "静かな安定感で周囲に安らぎを与えます。",
    },
    CategoryRow {
        id: 53,
        name: "風山漸",
        reading: "ふうざんぜん",
        upper: Trigram::Xun,
        lower: Trigram::Gen,
        keywords: &["漸進", "着実", "段階"],
        tagline: "着実な進歩を重ねる人",
        description: "焦らず着実に一歩ずつ前進します。",
    },
    CategoryRow {
        id: 54,
        name: "雷沢帰妹",
        reading: "らいたくきまい",
        upper: Trigram::Zhen,
        lower: Trigram::Dui,
        keywords: &["従属", "調和", "配慮"],
        tagline: "従属の中で調和を見つける人",
        description: "従う立場でも調和と幸せを見つけます。",
    },
    CategoryRow {
        id: 55,
        name: "雷火豊",
        reading: "らいかほう",
        upper: Trigram::Zhen,
        lower: Trigram::Li,
        keywords: &["豊穣", "充実", "栄光"],
        tagline: "豊かな成果で栄光を掴む人",
        description: "豊富な成果と栄光を手にします。",
    },
    CategoryRow {
        id: 56,
        name: "火山旅",
        reading: "かざんりょ",
        upper: Trigram::Li,
        lower: Trigram::Gen,
        keywords: &["旅行", "経験", "移動"],
        tagline: "旅路で経験を積む人",
        description: "旅を通して多くの経験と智慧を積みます。",
    },
    CategoryRow {
        id: 57,
        name: "巽為風",
        reading: "そんいふう",
        upper: Trigram::Xun,
        lower: Trigram::Xun,
        keywords: &["柔軟", "適応", "浸透"],
        tagline: "柔軟性で変化に適応する人",
        description: "風のような柔軟性で変化に対応します。",
    },
    CategoryRow {
        id: 58,
        name: "兌為沢",
        reading: "だいたく",
        upper: Trigram::Dui,
        lower: Trigram::Dui,
        keywords: &["歓喜", "楽しみ", "交流"],
        tagline: "喜びと楽しさを分かち合う人",
        description: "人々と喜びや楽しさを分かち合います。",
    },
    CategoryRow {
        id: 59,
        name: "風水渙",
        reading: "ふうすいかん",
        upper: Trigram::Xun,
        lower: Trigram::Kan,
        keywords: &["分散", "解散", "再統合"],
        tagline: "散らばったものを再統合する人",
        description: "分散した要素を再び一つに統合します。",
    },
    CategoryRow {
        id: 60,
        name: "水沢節",
        reading: "すいたくせつ",
        upper: Trigram::Kan,
        lower: Trigram::Dui,
        keywords: &["節制", "調節", "適度"],
        tagline: "節度を保ち調和を作る人",
        description: "適切な節制で調和のとれた生活を送ります。",
    },
    CategoryRow {
        id: 61,
        name: "風沢中孚",
        reading: "ふうたくちゅうふ",
        upper: Trigram::Xun,
        lower: Trigram::Dui,
        keywords: &["誠実", "信頼", "真心"],
        tagline: "誠実さで深い信頼を得る人",
        description: "真心からの誠実さで人々の信頼を得ます。",
    },
    CategoryRow {
        id: 62,
        name: "雷山小過",
        reading: "らいざんしょうか",
        upper: Trigram::Zhen,
        lower: Trigram::Gen,
        keywords: &["配慮", "細心", "小事"],
        tagline: "小さな配慮で大きな成果を生む人",
        description: "細やかな心配りで大きな成功を収めます。",
    },
    CategoryRow {
        id: 63,
        name: "水火既済",
        reading: "すいかきさい",
        upper: Trigram::Kan,
        lower: Trigram::Li,
        keywords: &["完成", "調和", "達成"],
        tagline: "完成された調和を保つ人",
        description: "すべてが整った完璧な調和状態を維持します。",
    },
    CategoryRow {
        id: 64,
        name: "火水未済",
        reading: "かすいびさい",
        upper: Trigram::Li,
        lower: Trigram::Kan,
        keywords: &["未完", "可能性", "継続"],
        tagline: "未完成から新たな可能性を生む人",
        description: "まだ完成していない状態に新しい可能性を見出します。",
    },
];
