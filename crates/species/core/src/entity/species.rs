//! National-dex numbers referenced by the stat rules and classification tables.

use super::SpeciesId;

pub const ARTICUNO: SpeciesId = SpeciesId(144);
pub const ZAPDOS: SpeciesId = SpeciesId(145);
pub const MOLTRES: SpeciesId = SpeciesId(146);
pub const MEWTWO: SpeciesId = SpeciesId(150);
pub const MEW: SpeciesId = SpeciesId(151);
pub const RAIKOU: SpeciesId = SpeciesId(243);
pub const ENTEI: SpeciesId = SpeciesId(244);
pub const SUICUNE: SpeciesId = SpeciesId(245);
pub const LUGIA: SpeciesId = SpeciesId(249);
pub const HO_OH: SpeciesId = SpeciesId(250);
pub const CELEBI: SpeciesId = SpeciesId(251);
pub const SHEDINJA: SpeciesId = SpeciesId(292);
pub const REGIROCK: SpeciesId = SpeciesId(377);
pub const REGICE: SpeciesId = SpeciesId(378);
pub const REGISTEEL: SpeciesId = SpeciesId(379);
pub const LATIAS: SpeciesId = SpeciesId(380);
pub const LATIOS: SpeciesId = SpeciesId(381);
pub const KYOGRE: SpeciesId = SpeciesId(382);
pub const GROUDON: SpeciesId = SpeciesId(383);
pub const RAYQUAZA: SpeciesId = SpeciesId(384);
pub const JIRACHI: SpeciesId = SpeciesId(385);
pub const DEOXYS: SpeciesId = SpeciesId(386);
pub const UXIE: SpeciesId = SpeciesId(480);
pub const MESPRIT: SpeciesId = SpeciesId(481);
pub const AZELF: SpeciesId = SpeciesId(482);
pub const DIALGA: SpeciesId = SpeciesId(483);
pub const PALKIA: SpeciesId = SpeciesId(484);
pub const HEATRAN: SpeciesId = SpeciesId(485);
pub const REGIGIGAS: SpeciesId = SpeciesId(486);
pub const GIRATINA: SpeciesId = SpeciesId(487);
pub const CRESSELIA: SpeciesId = SpeciesId(488);
pub const PHIONE: SpeciesId = SpeciesId(489);
pub const MANAPHY: SpeciesId = SpeciesId(490);
pub const DARKRAI: SpeciesId = SpeciesId(491);
pub const SHAYMIN: SpeciesId = SpeciesId(492);
pub const ARCEUS: SpeciesId = SpeciesId(493);
pub const VICTINI: SpeciesId = SpeciesId(494);
pub const COBALION: SpeciesId = SpeciesId(638);
pub const TERRAKION: SpeciesId = SpeciesId(639);
pub const VIRIZION: SpeciesId = SpeciesId(640);
pub const TORNADUS: SpeciesId = SpeciesId(641);
pub const THUNDURUS: SpeciesId = SpeciesId(642);
pub const RESHIRAM: SpeciesId = SpeciesId(643);
pub const ZEKROM: SpeciesId = SpeciesId(644);
pub const LANDORUS: SpeciesId = SpeciesId(645);
pub const KYUREM: SpeciesId = SpeciesId(646);
pub const KELDEO: SpeciesId = SpeciesId(647);
pub const MELOETTA: SpeciesId = SpeciesId(648);
pub const GENESECT: SpeciesId = SpeciesId(649);
pub const XERNEAS: SpeciesId = SpeciesId(716);
pub const YVELTAL: SpeciesId = SpeciesId(717);
pub const ZYGARDE: SpeciesId = SpeciesId(718);
pub const DIANCIE: SpeciesId = SpeciesId(719);
pub const HOOPA: SpeciesId = SpeciesId(720);
pub const VOLCANION: SpeciesId = SpeciesId(721);
pub const TYPE_NULL: SpeciesId = SpeciesId(772);
pub const SILVALLY: SpeciesId = SpeciesId(773);
pub const TAPU_KOKO: SpeciesId = SpeciesId(785);
pub const TAPU_LELE: SpeciesId = SpeciesId(786);
pub const TAPU_BULU: SpeciesId = SpeciesId(787);
pub const TAPU_FINI: SpeciesId = SpeciesId(788);
pub const COSMOG: SpeciesId = SpeciesId(789);
pub const COSMOEM: SpeciesId = SpeciesId(790);
pub const SOLGALEO: SpeciesId = SpeciesId(791);
pub const LUNALA: SpeciesId = SpeciesId(792);
pub const NIHILEGO: SpeciesId = SpeciesId(793);
pub const BUZZWOLE: SpeciesId = SpeciesId(794);
pub const PHEROMOSA: SpeciesId = SpeciesId(795);
pub const XURKITREE: SpeciesId = SpeciesId(796);
pub const CELESTEELA: SpeciesId = SpeciesId(797);
pub const KARTANA: SpeciesId = SpeciesId(798);
pub const GUZZLORD: SpeciesId = SpeciesId(799);
pub const NECROZMA: SpeciesId = SpeciesId(800);
pub const MAGEARNA: SpeciesId = SpeciesId(801);
pub const MARSHADOW: SpeciesId = SpeciesId(802);
pub const POIPOLE: SpeciesId = SpeciesId(803);
pub const NAGANADEL: SpeciesId = SpeciesId(804);
pub const STAKATAKA: SpeciesId = SpeciesId(805);
pub const BLACEPHALON: SpeciesId = SpeciesId(806);
pub const ZERAORA: SpeciesId = SpeciesId(807);

pub const LEGENDARIES: &[SpeciesId] = &[
    ARTICUNO, ZAPDOS, MOLTRES, MEWTWO, MEW, RAIKOU, ENTEI, SUICUNE, LUGIA, HO_OH, CELEBI,
    REGIROCK, REGICE, REGISTEEL, LATIAS, LATIOS, KYOGRE, GROUDON, RAYQUAZA, JIRACHI, DEOXYS,
    UXIE, MESPRIT, AZELF, DIALGA, PALKIA, HEATRAN, REGIGIGAS, GIRATINA, CRESSELIA, PHIONE,
    MANAPHY, DARKRAI, SHAYMIN, ARCEUS, VICTINI, COBALION, TERRAKION, VIRIZION, TORNADUS,
    THUNDURUS, RESHIRAM, ZEKROM, LANDORUS, KYUREM, KELDEO, MELOETTA, GENESECT, XERNEAS,
    YVELTAL, ZYGARDE, DIANCIE, HOOPA, VOLCANION, TYPE_NULL, SILVALLY, TAPU_KOKO, TAPU_LELE,
    TAPU_BULU, TAPU_FINI, COSMOG, COSMOEM, SOLGALEO, LUNALA, NECROZMA, MAGEARNA, MARSHADOW,
    ZERAORA,
];

/// Box legendaries and their pre-evolutions.
pub const STRONG_LEGENDARIES: &[SpeciesId] = &[
    MEWTWO, LUGIA, HO_OH, KYOGRE, GROUDON, RAYQUAZA, DIALGA, PALKIA, REGIGIGAS, GIRATINA,
    ARCEUS, RESHIRAM, ZEKROM, KYUREM, XERNEAS, YVELTAL, COSMOG, COSMOEM, SOLGALEO, LUNALA,
];

pub const ULTRA_BEASTS: &[SpeciesId] = &[
    NIHILEGO, BUZZWOLE, PHEROMOSA, XURKITREE, CELESTEELA, KARTANA, GUZZLORD, POIPOLE,
    NAGANADEL, STAKATAKA, BLACEPHALON,
];
