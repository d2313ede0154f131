//! Built-in Vietnamese demo vocabulary continuing the prompt "Hôm nay tôi".

use rand::Rng;

use crate::error::Result;
use crate::vocab::Vocabulary;

/// Default prompt the demo vocabulary is tuned for.
pub const DEFAULT_PROMPT: &str = "Hôm nay tôi";

#[rustfmt::skip]
pub const DEMO_TOKENS: [&str; 38] = [
    "là", "một", "học sinh", "giáo viên", "bác sĩ", "kỹ sư",
    "đi", "chơi", "học", "làm", "ăn", "ngủ", "xem", "phim",
    "rất", "vui", "buồn", "hạnh phúc", "lo lắng", "mệt mỏi",
    "đến", "trường", "công ty", "nhà", "bệnh viện", "công viên",
    "và", "nhưng", "tuy nhiên", "vì vậy", "để", "có thể",
    "hôm nay", "ngày mai", "thời tiết", "khá", "đẹp", "nắng",
];

/// Plausible continuations get fixed, higher scores.
const BOOSTS: [(&str, f64); 5] = [
    ("đi", -0.5),
    ("học", -0.8),
    ("làm", -1.0),
    ("rất", -1.2),
    ("là", -1.5),
];

/// Build the demo vocabulary. Unboosted tokens get a score in `(-6, -1]`
/// drawn from `rng`, so the layout is reproducible for a seeded generator.
pub fn demo_vocabulary<R: Rng + ?Sized>(rng: &mut R) -> Result<Vocabulary> {
    let pairs = DEMO_TOKENS.iter().map(|&tok| {
        let random = -rng.gen::<f64>() * 5.0 - 1.0;
        let score = BOOSTS
            .iter()
            .find(|(boosted, _)| *boosted == tok)
            .map_or(random, |&(_, s)| s);
        (tok, score)
    });
    Vocabulary::from_pairs(pairs)
}
