//! Multipliers found by `find_magics` and checked against the ray walk.
//!
//! They only hold for the masks of [`crate::rays::relevance_mask`] and the
//! subset order of [`crate::occupancy::occupancy_from_index`]. Loading goes
//! through [`crate::magic::MagicTable::from_magics`], which rejects any
//! multiplier that collides.

/// Bishop multipliers, indexed by square (a8 = 0).
#[rustfmt::skip]
pub const BISHOP_MAGICS: [u64; 64] = [
    0x0408308400802201, 0x8103100106118000, 0x0010041651433102, 0x0004240094000004,
    0x30011040410c1008, 0x0018220820420820, 0x5284020805042012, 0x0480420210024203,
    0x0850886101021204, 0x0062442802240020, 0x0220121086120100, 0x0004082080200008,
    0x1002220210046800, 0x0020810422414800, 0x0400005f08201040, 0x0008903602101400,
    0x8050010a02d00400, 0x101000aa82480305, 0x8008000102040011, 0x1000880802004080,
    0x0009000190400002, 0x1001801901414010, 0x0821000080882000, 0x6042041900420208,
    0x0450089004e00400, 0x0c01040048100460, 0x0640405008020046, 0x0324080100220040,
    0x4112001102005000, 0x9008004108090800, 0x1401020021080101, 0x058400200105210a,
    0x2050082208041c84, 0x0084014800043001, 0x0200209000080020, 0x0006820080080080,
    0x0409020400020500, 0x00105a0200002082, 0x2002120049040400, 0x000a088820030408,
    0x000488541000c009, 0x04284a0211182008, 0x0002001044240800, 0x8000112015020807,
    0x488c020204109202, 0x0082100502020109, 0x4410010104210101, 0x0008080910400020,
    0x2020880808842280, 0x082a004a02308900, 0x0054010088040000, 0x0002490042022420,
    0x0812004008220000, 0x0110102021010104, 0x00d0451004024000, 0x0cc4011204010a22,
    0x1409840100822110, 0x0031805200900804, 0x0340400232051004, 0x030c008818842402,
    0x0300000008208844, 0x80000c0810019203, 0x00a0910441080200, 0x92c0100102008010,
];

/// Rook multipliers, indexed by square (a8 = 0).
#[rustfmt::skip]
pub const ROOK_MAGICS: [u64; 64] = [
    0x8d80004004302480, 0x0440001000402000, 0x3480200289100080, 0x0480100208008004,
    0x0280080180040002, 0x0600100600040831, 0x0400300401084082, 0x1a00020040810024,
    0x0082002080420101, 0x0202002080410200, 0x0210801000200882, 0x2408801000080080,
    0x5090800800840080, 0x0222000488908200, 0x0004001002080104, 0x0c20800080005900,
    0x924380800820c011, 0x0040484010002000, 0x0020008020801000, 0x1020808010000804,
    0x0402850008009100, 0x8054008002008004, 0x400004005f100802, 0x00c65a0004164a81,
    0x0c00408200210200, 0x041002c240002000, 0x0020004100210010, 0x0600100080080082,
    0xc208008880040080, 0x0400020080040080, 0xe000420400614810, 0x0020008200104104,
    0x0800804000800038, 0x0290002008400048, 0x2080200282801000, 0x0c1600100a004120,
    0xc100800800800402, 0x04a0020080800400, 0x0208480184000210, 0x1801010082000044,
    0x1000400080008024, 0x100120100040c000, 0xa025002002450010, 0xc240080010008080,
    0x842b010801050010, 0x0080040002008080, 0x0040821001840008, 0x0000412040920004,
    0x0421400680002480, 0x0100400080200080, 0x0018801042002200, 0x0800480080100280,
    0x0685800402080080, 0x0089008400020900, 0x5044302802018400, 0x0200005084110200,
    0x0020310080012441, 0x0000204104120086, 0x00004010800a2202, 0x2002082010000501,
    0x0002006010440882, 0x8002004150381402, 0x050004a502181004, 0xc200002081004402,
];
