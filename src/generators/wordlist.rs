// src/generators/wordlist.rs

/// Short lowercase words used for memorable passphrases.
pub const WORDLIST: &[&str] = &[
    "acid", "acorn", "acre", "acts", "afar", "affix", "aged", "agent", "agile", "aging",
    "agony", "ahead", "aide", "aids", "aim", "air", "aisle", "ajar", "alarm", "album",
    "ale", "alert", "alga", "alia", "alias", "alibi", "alien", "align", "alike", "alive",
    "alkali", "all", "alley", "alloy", "ally", "aloe", "aloft", "aloha", "alone", "amaze",
    "amber", "ambit", "amble", "ambush", "amend", "amid", "amide", "amino", "ample",
    "amply", "amuck", "amuse", "anew", "ankle", "annex", "annoy", "annul", "anthem",
    "any", "anyhow", "anyway", "apart", "apathy", "apex", "aphid", "aplomb", "appeal",
    "apple", "apply", "apron", "apt", "aptly", "arbor", "arc", "arcane", "arch", "area",
    "arena", "argon", "argue", "arise", "ark", "arm", "armful", "armpit", "army", "aroma",
    "array", "arrow", "arson", "art", "ascot", "ashen", "ash", "aside", "ask", "askew",
    "asleep", "aspect", "assay", "asset", "atlas", "atom", "atomic", "attic", "audio",
    "audit", "auger", "aunt", "aura", "auto", "autumn", "avail", "avert", "avian",
    "avoid", "await", "awake", "award", "aware", "awash", "away", "awful", "awoke",
    "axial", "axiom", "axis", "axle", "bacon", "badge", "badly", "bag", "baggy", "bail",
    "bait", "bake", "baker", "balance", "bald", "ball", "ballet", "ballot", "balm",
    "balsa", "bamboo", "band", "banjo", "bank", "bar", "barb", "bard", "barely", "barge",
    "bark", "barley", "barn", "baron", "barrel", "base", "basic", "basil", "basin",
    "basis", "basket", "bass", "bat", "batch", "bath", "baton", "battle", "bay", "beach",
    "bead", "beak", "beam", "bean", "bear", "beard", "beast", "beat", "beauty", "beaver",
    "beckon", "bed", "bee", "beech", "beef", "beep", "beer", "beet", "befit", "beg",
    "began", "beget", "begin", "begun", "beige", "being", "belch", "bell", "belly",
    "below", "belt", "bench", "bend", "best", "bet", "beta", "bevel", "bevy", "bias",
    "bible", "bicep", "bidet", "big", "bike", "bile", "bilge", "bill", "billion", "bin",
    "bind", "bingo", "biped", "birch", "bird", "birth", "bison", "bit", "bitch", "bite",
    "black", "blade", "blame", "bland", "blast", "blaze", "bleak", "bleat", "bleed",
    "bleep", "blend", "bless", "blimp", "blink", "blip", "bliss", "blitz", "bloat",
    "blob", "block", "blond", "blood", "bloom", "blow", "blue", "bluff", "blunt", "blur",
    "blurt", "blush", "boar", "board", "boast", "boat", "body", "bog", "bogus", "boil",
    "bold", "bolt", "bomb", "bond", "bone", "bonnet", "bonus", "bony", "book", "boom",
    "boost", "boot", "booth", "booze", "bop", "borax", "bore", "born", "boron", "boss",
    "botch", "both", "bottle", "bottom", "bough", "bouncy", "bound", "bow", "bowl", "box",
    "boy", "bra", "brace", "brad", "brag", "braid", "brain", "brake", "bran", "brand",
    "brash", "brass", "brat", "brave", "brawl", "brawn", "bread", "break", "breed",
    "breeze", "bribe", "brick", "bride", "brief", "brig", "brim", "brine", "bring",
    "brink", "brisk", "broad", "broil", "broke", "bronze", "brood", "brook", "broom",
    "broth", "brown", "browse", "brunt", "brush", "brute", "bubble", "buck", "bucket",
    "buckle", "buddy", "budge", "budget", "buff", "bug", "buggy", "build", "bulb",
    "bulge", "bulk", "bulky", "bull", "bully", "bump", "bumpy", "bunch", "bungee", "bunk",
    "bunny", "bunt", "buoy", "burly", "burn", "burp", "burrow", "bursar", "burst", "bus",
    "bush", "bust", "busy", "but", "butane", "butch", "butt", "buy", "buyer", "buzz",
    "bye", "bygone", "bylaw", "bypass", "byte",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wordlist_is_distinct_and_lowercase() {
        let unique: HashSet<&str> = WORDLIST.iter().copied().collect();
        assert_eq!(unique.len(), WORDLIST.len());
        assert_eq!(WORDLIST.len(), 389);
        assert!(WORDLIST
            .iter()
            .all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
