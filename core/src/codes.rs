//! # OS10 Vendor Code Tables
//!
//! Static mappings from the small integers the switch reports to their MIB
//! labels. Pure data, shared read-only by every evaluator.

/// os10CmnOperStatus: per-unit operational state of fan trays and PSUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperStatus {
    Up,
    Down,
    Testing,
    Unknown,
    Dormant,
    NotPresent,
    LowerLayerDown,
    Failed,
}

impl OperStatus {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(OperStatus::Up),
            2 => Some(OperStatus::Down),
            3 => Some(OperStatus::Testing),
            4 => Some(OperStatus::Unknown),
            5 => Some(OperStatus::Dormant),
            6 => Some(OperStatus::NotPresent),
            7 => Some(OperStatus::LowerLayerDown),
            8 => Some(OperStatus::Failed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OperStatus::Up => "up",
            OperStatus::Down => "down",
            OperStatus::Testing => "testing",
            OperStatus::Unknown => "unknown",
            OperStatus::Dormant => "dormant",
            OperStatus::NotPresent => "notPresent",
            OperStatus::LowerLayerDown => "lowerLayerDown",
            OperStatus::Failed => "failed",
        }
    }
}

/// os10CardOperStatus: state of the single active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Ready,
    CardMisMatch,
    CardProblem,
    DiagMode,
    CardAbsent,
    Offline,
}

impl CardStatus {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(CardStatus::Ready),
            2 => Some(CardStatus::CardMisMatch),
            3 => Some(CardStatus::CardProblem),
            4 => Some(CardStatus::DiagMode),
            5 => Some(CardStatus::CardAbsent),
            6 => Some(CardStatus::Offline),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardStatus::Ready => "ready",
            CardStatus::CardMisMatch => "cardMisMatch",
            CardStatus::CardProblem => "cardProblem",
            CardStatus::DiagMode => "diagMode",
            CardStatus::CardAbsent => "cardAbsent",
            CardStatus::Offline => "offline",
        }
    }
}

/// os10ChassisDefType: hardware model behind the chassis type code.
pub fn chassis_model(code: i64) -> &'static str {
    match code {
        1 => "s6000on",
        2 => "s4048on",
        3 => "s4048Ton",
        4 => "s3048on",
        5 => "s6010on",
        6 => "s4148Fon",
        7 => "s4128Fon",
        8 => "s4148Ton",
        9 => "s4128Ton",
        10 => "s4148FEon",
        11 => "s4148Uon",
        12 => "s4200on",
        13 => "mx5108Non",
        14 => "mx9116Non",
        15 => "s5148Fon",
        16 => "z9100on",
        17 => "s4248FBon",
        18 => "s4248FBLon",
        19 => "s4112Fon",
        20 => "s4112Ton",
        21 => "z9264Fon",
        _ => "unknown",
    }
}
