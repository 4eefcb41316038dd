use super::types::TimeInstant;

/// `(name, start_year, end_year, color, level)` rows, oldest first within a level.
pub(super) const GEOLOGICAL_PERIODS: &[(&str, TimeInstant, TimeInstant, &str, u8)] = &[
    // Cosmic eras
    ("Cosmic Dawn", 13_800_000_000, 13_000_000_000, "rgba(40, 40, 90, 0.5)", 0),
    ("Galactic Era", 13_000_000_000, 4_600_000_000, "rgba(70, 70, 140, 0.5)", 0),
    ("Solar System", 4_600_000_000, 0, "rgba(230, 180, 60, 0.5)", 0),
    // Eons
    ("Hadean", 4_600_000_000, 4_000_000_000, "rgba(207, 70, 70, 0.5)", 1),
    ("Archean", 4_000_000_000, 2_500_000_000, "rgba(147, 196, 125, 0.5)", 1),
    ("Proterozoic", 2_500_000_000, 541_000_000, "rgba(63, 158, 126, 0.5)", 1),
    ("Phanerozoic", 541_000_000, 0, "rgba(90, 210, 115, 0.5)", 1),
    // Eras
    ("Paleoproterozoic", 2_500_000_000, 1_600_000_000, "rgba(234, 95, 135, 0.5)", 2),
    ("Mesoproterozoic", 1_600_000_000, 1_000_000_000, "rgba(253, 180, 98, 0.5)", 2),
    ("Neoproterozoic", 1_000_000_000, 541_000_000, "rgba(254, 179, 66, 0.5)", 2),
    ("Paleozoic", 541_000_000, 251_900_000, "rgba(145, 72, 182, 0.5)", 2),
    ("Mesozoic", 251_900_000, 66_000_000, "rgba(199, 88, 199, 0.5)", 2),
    ("Cenozoic", 66_000_000, 0, "rgba(219, 130, 222, 0.5)", 2),
    // Periods
    ("Cambrian", 541_000_000, 485_400_000, "rgba(127, 160, 86, 0.5)", 3),
    ("Ordovician", 485_400_000, 443_800_000, "rgba(0, 146, 112, 0.5)", 3),
    ("Silurian", 443_800_000, 419_200_000, "rgba(179, 225, 182, 0.5)", 3),
    ("Devonian", 419_200_000, 358_900_000, "rgba(203, 140, 55, 0.5)", 3),
    ("Carboniferous", 358_900_000, 298_900_000, "rgba(103, 165, 153, 0.5)", 3),
    ("Permian", 298_900_000, 251_900_000, "rgba(240, 64, 40, 0.5)", 3),
    ("Triassic", 251_900_000, 201_300_000, "rgba(129, 43, 146, 0.5)", 3),
    ("Jurassic", 201_300_000, 145_000_000, "rgba(52, 178, 201, 0.5)", 3),
    ("Cretaceous", 145_000_000, 66_000_000, "rgba(127, 198, 78, 0.5)", 3),
    ("Paleogene", 66_000_000, 23_030_000, "rgba(253, 154, 82, 0.5)", 3),
    ("Neogene", 23_030_000, 2_580_000, "rgba(255, 230, 25, 0.5)", 3),
    ("Quaternary", 2_580_000, 0, "rgba(249, 249, 127, 0.5)", 3),
    // Epochs
    ("Paleocene", 66_000_000, 56_000_000, "rgba(253, 167, 95, 0.5)", 4),
    ("Eocene", 56_000_000, 33_900_000, "rgba(253, 180, 108, 0.5)", 4),
    ("Oligocene", 33_900_000, 23_030_000, "rgba(254, 192, 122, 0.5)", 4),
    ("Miocene", 23_030_000, 5_333_000, "rgba(255, 255, 0, 0.5)", 4),
    ("Pliocene", 5_333_000, 2_580_000, "rgba(255, 255, 153, 0.5)", 4),
    ("Pleistocene", 2_580_000, 11_700, "rgba(255, 242, 174, 0.5)", 4),
    ("Holocene", 11_700, 0, "rgba(254, 242, 224, 0.5)", 4),
    // Ages
    ("Gelasian", 2_580_000, 1_800_000, "rgba(255, 237, 179, 0.5)", 5),
    ("Calabrian", 1_800_000, 774_000, "rgba(255, 242, 186, 0.5)", 5),
    ("Chibanian", 774_000, 129_000, "rgba(255, 242, 199, 0.5)", 5),
    ("Upper Pleistocene", 129_000, 11_700, "rgba(255, 242, 211, 0.5)", 5),
    ("Greenlandian", 11_700, 8_200, "rgba(254, 236, 219, 0.5)", 5),
    ("Northgrippian", 8_200, 4_200, "rgba(253, 237, 227, 0.5)", 5),
    ("Meghalayan", 4_200, 0, "rgba(253, 240, 234, 0.5)", 5),
    // Holocene chronozones
    ("Preboreal", 11_700, 10_500, "rgba(196, 222, 240, 0.5)", 6),
    ("Boreal", 10_500, 8_900, "rgba(170, 206, 230, 0.5)", 6),
    ("Atlantic", 8_900, 5_700, "rgba(140, 190, 222, 0.5)", 6),
    ("Subboreal", 5_700, 2_600, "rgba(115, 172, 212, 0.5)", 6),
    ("Subatlantic", 2_600, 0, "rgba(90, 150, 200, 0.5)", 6),
];
