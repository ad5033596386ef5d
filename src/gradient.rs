pub const ENERGY_LABEL: &str = "Energy Level";
pub const STRESS_LABEL: &str = "Stress Level";

pub const MOOD_EMOJIS: [&str; 5] = ["😢", "😕", "😐", "😊", "😄"];
pub const MOOD_LABELS: [&str; 5] = ["Terrible", "Bad", "Okay", "Good", "Great"];

const RED_700: &str = "#b91c1c";
const RED_500: &str = "#ef4444";
const ORANGE_400: &str = "#fb923c";
const ORANGE_300: &str = "#fdba74";
const YELLOW_200: &str = "#fef08a";
const GREEN_700: &str = "#15803d";
const GREEN_600: &str = "#16a34a";
const GREEN_500: &str = "#22c55e";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
    severity: u8,
}

impl Gradient {
    pub fn css(&self) -> String {
        format!("linear-gradient(to right, {}, {})", self.from, self.to)
    }

    // 0 = calmest, 4 = most alarming
    pub fn severity(&self) -> u8 {
        self.severity
    }
}

const fn gradient(from: &'static str, to: &'static str, severity: u8) -> Gradient {
    Gradient { from, to, severity }
}

pub fn resolve_gradient(label: &str, rating: u8) -> Gradient {
    let rating = rating.clamp(1, 5);
    if label == STRESS_LABEL {
        match rating {
            5 => gradient(RED_500, RED_700, 4),
            4 => gradient(ORANGE_400, RED_500, 3),
            3 => gradient(YELLOW_200, ORANGE_400, 2),
            2 => gradient(GREEN_600, YELLOW_200, 1),
            _ => gradient(GREEN_500, GREEN_700, 0),
        }
    } else {
        match rating {
            1 => gradient(RED_700, RED_500, 4),
            2 => gradient(RED_500, ORANGE_400, 3),
            3 => gradient(ORANGE_300, YELLOW_200, 2),
            4 => gradient(YELLOW_200, GREEN_600, 1),
            _ => gradient(GREEN_600, GREEN_500, 0),
        }
    }
}

pub fn mood_emoji(rating: u8) -> &'static str {
    MOOD_EMOJIS[(rating.clamp(1, 5) - 1) as usize]
}

pub fn mood_label(rating: u8) -> &'static str {
    MOOD_LABELS[(rating.clamp(1, 5) - 1) as usize]
}
