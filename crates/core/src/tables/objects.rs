//! The ordered 1.6 object catalog.
//!
//! Generated from the game's object data; do not hand-edit. The row order
//! is observable (one shuffle-key draw per row, rejected rows included), so
//! rows stay sorted by id exactly as the game's data file enumerates them.

use super::ObjectEntry;

#[rustfmt::skip]
pub const OBJECTS_1_6: &[ObjectEntry] = &[
    ObjectEntry { id: 16, price: 50, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 18, price: 30, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 20, price: 60, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 22, price: 40, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 24, price: 35, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 60, price: 250, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 62, price: 180, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 64, price: 250, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 66, price: 100, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 68, price: 80, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 69, price: 1000, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 70, price: 200, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 71, price: 0, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 72, price: 750, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 74, price: 2000, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 78, price: 25, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 79, price: 1, offlimits: true, category: 0, type_excluded: false },
    ObjectEntry { id: 80, price: 25, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 82, price: 100, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 84, price: 75, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 86, price: 50, offlimits: false, category: -2, type_excluded: true },
    ObjectEntry { id: 88, price: 100, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 90, price: 75, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 92, price: 2, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 93, price: 5, offlimits: false, category: 0, type_excluded: false },
    ObjectEntry { id: 96, price: 1, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 97, price: 1, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 98, price: 1, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 99, price: 1, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 100, price: 40, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 101, price: 40, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 102, price: 50, offlimits: true, category: 0, type_excluded: true },
    ObjectEntry { id: 103, price: 60, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 104, price: 200, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 105, price: 50, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 106, price: 300, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 107, price: 350, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 108, price: 300, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 109, price: 100, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 110, price: 25, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 111, price: 25, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 112, price: 25, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 113, price: 50, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 114, price: 5, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 115, price: 50, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 116, price: 40, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 117, price: 100, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 118, price: 20, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 119, price: 100, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 120, price: 50, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 121, price: 100, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 122, price: 200, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 123, price: 100, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 124, price: 500, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 125, price: 250, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 126, price: 1000, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 127, price: 1000, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 128, price: 200, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 129, price: 30, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 130, price: 100, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 131, price: 40, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 132, price: 45, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 136, price: 100, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 137, price: 50, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 138, price: 65, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 139, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 140, price: 105, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 141, price: 55, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 142, price: 30, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 143, price: 200, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 144, price: 100, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 145, price: 30, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 146, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 147, price: 30, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 148, price: 85, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 149, price: 150, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 150, price: 50, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 151, price: 80, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 152, price: 20, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 153, price: 15, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 154, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 155, price: 250, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 156, price: 45, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 157, price: 25, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 158, price: 300, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 159, price: 1500, offlimits: true, category: -4, type_excluded: false },
    ObjectEntry { id: 160, price: 900, offlimits: true, category: -4, type_excluded: false },
    ObjectEntry { id: 163, price: 5000, offlimits: true, category: -4, type_excluded: false },
    ObjectEntry { id: 164, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 165, price: 150, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 166, price: 5000, offlimits: false, category: 0, type_excluded: false },
    ObjectEntry { id: 167, price: 25, offlimits: false, category: -20, type_excluded: false },
    ObjectEntry { id: 168, price: 0, offlimits: false, category: -20, type_excluded: false },
    ObjectEntry { id: 169, price: 0, offlimits: false, category: -20, type_excluded: false },
    ObjectEntry { id: 170, price: 0, offlimits: false, category: -20, type_excluded: false },
    ObjectEntry { id: 171, price: 0, offlimits: false, category: -20, type_excluded: false },
    ObjectEntry { id: 172, price: 0, offlimits: false, category: -20, type_excluded: false },
    ObjectEntry { id: 174, price: 95, offlimits: false, category: -5, type_excluded: false },
    ObjectEntry { id: 176, price: 50, offlimits: false, category: -5, type_excluded: false },
    ObjectEntry { id: 180, price: 50, offlimits: false, category: -5, type_excluded: false },
    ObjectEntry { id: 182, price: 95, offlimits: false, category: -5, type_excluded: false },
    ObjectEntry { id: 184, price: 125, offlimits: false, category: -6, type_excluded: false },
    ObjectEntry { id: 186, price: 190, offlimits: false, category: -6, type_excluded: false },
    ObjectEntry { id: 188, price: 40, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 190, price: 175, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 192, price: 80, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 194, price: 35, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 195, price: 125, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 196, price: 110, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 197, price: 300, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 198, price: 100, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 199, price: 120, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 200, price: 120, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 201, price: 350, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 202, price: 150, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 203, price: 225, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 204, price: 250, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 205, price: 200, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 206, price: 300, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 207, price: 100, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 208, price: 200, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 209, price: 150, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 210, price: 120, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 211, price: 80, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 212, price: 300, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 213, price: 500, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 214, price: 150, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 215, price: 200, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 216, price: 60, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 217, price: 250, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 218, price: 100, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 219, price: 200, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 220, price: 480, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 221, price: 400, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 222, price: 140, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 223, price: 120, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 224, price: 120, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 225, price: 175, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 226, price: 75, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 227, price: 220, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 228, price: 50, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 229, price: 400, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 230, price: 200, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 231, price: 260, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 232, price: 120, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 233, price: 150, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 234, price: 350, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 235, price: 300, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 236, price: 220, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 237, price: 120, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 238, price: 165, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 239, price: 150, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 240, price: 180, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 241, price: 220, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 242, price: 200, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 243, price: 100, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 244, price: 100, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 248, price: 60, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 250, price: 110, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 251, price: 500, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 252, price: 220, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 253, price: 450, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 254, price: 250, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 256, price: 60, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 257, price: 150, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 258, price: 50, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 259, price: 90, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 260, price: 40, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 262, price: 25, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 264, price: 90, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 265, price: 300, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 266, price: 260, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 267, price: 100, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 268, price: 750, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 269, price: 150, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 270, price: 50, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 271, price: 30, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 272, price: 60, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 273, price: 20, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 274, price: 160, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 276, price: 320, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 278, price: 80, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 280, price: 160, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 281, price: 160, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 282, price: 75, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 283, price: 80, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 284, price: 100, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 286, price: 50, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 287, price: 50, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 288, price: 50, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 292, price: 100, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 293, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 294, price: 0, offlimits: false, category: -999, type_excluded: false },
    ObjectEntry { id: 295, price: 0, offlimits: false, category: -999, type_excluded: false },
    ObjectEntry { id: 296, price: 5, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 298, price: 10, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 299, price: 35, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 300, price: 150, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 301, price: 30, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 302, price: 30, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 303, price: 300, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 304, price: 25, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 305, price: 65, offlimits: false, category: -5, type_excluded: false },
    ObjectEntry { id: 306, price: 190, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 307, price: 375, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 308, price: 275, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 309, price: 20, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 310, price: 5, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 311, price: 5, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 322, price: 1, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 323, price: 2, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 324, price: 6, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 325, price: 4, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 326, price: 50, offlimits: true, category: 0, type_excluded: false },
    ObjectEntry { id: 328, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 329, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 330, price: 20, offlimits: false, category: -16, type_excluded: false },
    ObjectEntry { id: 331, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 333, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 334, price: 60, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 335, price: 120, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 336, price: 250, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 337, price: 1000, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 338, price: 50, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 340, price: 100, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 341, price: 200, offlimits: true, category: 0, type_excluded: false },
    ObjectEntry { id: 342, price: 100, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 343, price: 0, offlimits: false, category: -999, type_excluded: false },
    ObjectEntry { id: 344, price: 160, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 346, price: 200, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 347, price: 200, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 348, price: 400, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 350, price: 150, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 368, price: 2, offlimits: false, category: -19, type_excluded: false },
    ObjectEntry { id: 369, price: 10, offlimits: false, category: -19, type_excluded: false },
    ObjectEntry { id: 370, price: 4, offlimits: false, category: -19, type_excluded: false },
    ObjectEntry { id: 371, price: 5, offlimits: false, category: -19, type_excluded: false },
    ObjectEntry { id: 372, price: 50, offlimits: false, category: -23, type_excluded: false },
    ObjectEntry { id: 373, price: 2500, offlimits: false, category: 0, type_excluded: false },
    ObjectEntry { id: 376, price: 140, offlimits: false, category: -80, type_excluded: false },
    ObjectEntry { id: 378, price: 5, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 380, price: 10, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 382, price: 15, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 384, price: 25, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 386, price: 100, offlimits: false, category: -15, type_excluded: false },
    ObjectEntry { id: 388, price: 2, offlimits: false, category: -16, type_excluded: false },
    ObjectEntry { id: 390, price: 2, offlimits: false, category: -16, type_excluded: false },
    ObjectEntry { id: 392, price: 120, offlimits: false, category: -23, type_excluded: false },
    ObjectEntry { id: 393, price: 80, offlimits: false, category: -23, type_excluded: false },
    ObjectEntry { id: 394, price: 300, offlimits: false, category: -23, type_excluded: false },
    ObjectEntry { id: 396, price: 80, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 397, price: 160, offlimits: false, category: -23, type_excluded: false },
    ObjectEntry { id: 398, price: 80, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 399, price: 8, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 400, price: 120, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 401, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 402, price: 50, offlimits: false, category: -80, type_excluded: false },
    ObjectEntry { id: 404, price: 40, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 405, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 406, price: 80, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 407, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 408, price: 90, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 409, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 410, price: 20, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 411, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 412, price: 70, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 413, price: 100, offlimits: true, category: -28, type_excluded: false },
    ObjectEntry { id: 414, price: 150, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 415, price: 1, offlimits: false, category: -24, type_excluded: false },
    ObjectEntry { id: 416, price: 100, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 417, price: 3000, offlimits: false, category: -17, type_excluded: false },
    ObjectEntry { id: 418, price: 60, offlimits: false, category: -80, type_excluded: false },
    ObjectEntry { id: 420, price: 75, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 421, price: 80, offlimits: false, category: -80, type_excluded: false },
    ObjectEntry { id: 422, price: 250, offlimits: false, category: -81, type_excluded: false },
    ObjectEntry { id: 424, price: 230, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 425, price: 40, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 426, price: 400, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 427, price: 10, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 428, price: 470, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 429, price: 15, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 430, price: 625, offlimits: false, category: -17, type_excluded: false },
    ObjectEntry { id: 431, price: 20, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 432, price: 1065, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 433, price: 15, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 436, price: 225, offlimits: false, category: -6, type_excluded: false },
    ObjectEntry { id: 437, price: 100, offlimits: true, category: -28, type_excluded: false },
    ObjectEntry { id: 438, price: 345, offlimits: false, category: -6, type_excluded: false },
    ObjectEntry { id: 439, price: 100, offlimits: true, category: -28, type_excluded: false },
    ObjectEntry { id: 440, price: 340, offlimits: false, category: -18, type_excluded: false },
    ObjectEntry { id: 442, price: 95, offlimits: false, category: -5, type_excluded: false },
    ObjectEntry { id: 444, price: 250, offlimits: false, category: -18, type_excluded: false },
    ObjectEntry { id: 445, price: 500, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 446, price: 565, offlimits: false, category: -18, type_excluded: false },
    ObjectEntry { id: 450, price: 0, offlimits: false, category: -999, type_excluded: false },
    ObjectEntry { id: 452, price: 0, offlimits: false, category: -999, type_excluded: false },
    ObjectEntry { id: 453, price: 50, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 454, price: 550, offlimits: true, category: -79, type_excluded: false },
    ObjectEntry { id: 455, price: 25, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 456, price: 100, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 457, price: 150, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 459, price: 200, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 460, price: 2500, offlimits: true, category: 0, type_excluded: false },
    ObjectEntry { id: 465, price: 20, offlimits: false, category: -19, type_excluded: false },
    ObjectEntry { id: 466, price: 40, offlimits: false, category: -19, type_excluded: false },
    ObjectEntry { id: 472, price: 10, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 473, price: 30, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 474, price: 40, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 475, price: 25, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 476, price: 20, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 477, price: 35, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 478, price: 50, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 479, price: 40, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 480, price: 25, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 481, price: 40, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 482, price: 20, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 483, price: 5, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 484, price: 20, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 485, price: 50, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 486, price: 200, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 487, price: 75, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 488, price: 10, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 489, price: 15, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 490, price: 50, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 491, price: 25, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 492, price: 30, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 493, price: 120, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 494, price: 10, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 495, price: 35, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 496, price: 55, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 497, price: 45, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 498, price: 30, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 499, price: 30, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 516, price: 100, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 517, price: 200, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 518, price: 100, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 519, price: 200, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 520, price: 700, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 521, price: 1500, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 522, price: 1500, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 523, price: 1500, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 524, price: 1500, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 525, price: 1500, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 526, price: 1500, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 527, price: 2000, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 529, price: 200, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 530, price: 200, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 531, price: 400, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 532, price: 400, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 533, price: 600, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 534, price: 600, offlimits: false, category: -96, type_excluded: false },
    ObjectEntry { id: 535, price: 50, offlimits: false, category: 0, type_excluded: false },
    ObjectEntry { id: 536, price: 100, offlimits: false, category: 0, type_excluded: false },
    ObjectEntry { id: 537, price: 150, offlimits: false, category: 0, type_excluded: false },
    ObjectEntry { id: 538, price: 150, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 539, price: 300, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 540, price: 50, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 541, price: 125, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 542, price: 75, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 543, price: 300, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 544, price: 100, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 545, price: 200, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 546, price: 150, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 547, price: 450, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 548, price: 150, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 549, price: 115, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 550, price: 50, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 551, price: 200, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 552, price: 100, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 553, price: 400, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 554, price: 200, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 555, price: 80, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 556, price: 80, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 557, price: 120, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 558, price: 100, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 559, price: 120, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 560, price: 220, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 561, price: 200, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 562, price: 275, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 563, price: 150, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 564, price: 150, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 565, price: 350, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 566, price: 125, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 567, price: 110, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 568, price: 60, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 569, price: 75, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 570, price: 175, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 571, price: 15, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 572, price: 120, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 573, price: 150, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 574, price: 25, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 575, price: 200, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 576, price: 85, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 577, price: 250, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 578, price: 500, offlimits: false, category: -12, type_excluded: true },
    ObjectEntry { id: 590, price: 0, offlimits: false, category: -999, type_excluded: false },
    ObjectEntry { id: 591, price: 30, offlimits: false, category: -80, type_excluded: false },
    ObjectEntry { id: 593, price: 90, offlimits: false, category: -80, type_excluded: false },
    ObjectEntry { id: 595, price: 290, offlimits: false, category: -80, type_excluded: false },
    ObjectEntry { id: 597, price: 50, offlimits: false, category: -80, type_excluded: false },
    ObjectEntry { id: 599, price: 100, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 604, price: 260, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 605, price: 210, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 606, price: 335, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 607, price: 270, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 608, price: 385, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 609, price: 300, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 610, price: 450, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 611, price: 260, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 612, price: 175, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 613, price: 100, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 614, price: 100, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 618, price: 210, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 621, price: 450, offlimits: false, category: -8, type_excluded: false },
    ObjectEntry { id: 628, price: 850, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 629, price: 500, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 630, price: 1000, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 631, price: 1500, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 632, price: 1500, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 633, price: 1000, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 634, price: 50, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 635, price: 100, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 636, price: 140, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 637, price: 140, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 638, price: 80, offlimits: false, category: -79, type_excluded: false },
    ObjectEntry { id: 645, price: 1000, offlimits: true, category: -8, type_excluded: false },
    ObjectEntry { id: 648, price: 345, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 649, price: 350, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 651, price: 250, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 680, price: 1000, offlimits: true, category: -28, type_excluded: false },
    ObjectEntry { id: 682, price: 1000, offlimits: true, category: -4, type_excluded: false },
    ObjectEntry { id: 684, price: 8, offlimits: false, category: -28, type_excluded: false },
    ObjectEntry { id: 685, price: 1, offlimits: false, category: -21, type_excluded: false },
    ObjectEntry { id: 686, price: 250, offlimits: false, category: -22, type_excluded: false },
    ObjectEntry { id: 687, price: 500, offlimits: false, category: -22, type_excluded: false },
    ObjectEntry { id: 691, price: 500, offlimits: false, category: -22, type_excluded: false },
    ObjectEntry { id: 692, price: 150, offlimits: false, category: -22, type_excluded: false },
    ObjectEntry { id: 693, price: 250, offlimits: false, category: -22, type_excluded: false },
    ObjectEntry { id: 694, price: 200, offlimits: false, category: -22, type_excluded: false },
    ObjectEntry { id: 695, price: 250, offlimits: false, category: -22, type_excluded: false },
    ObjectEntry { id: 698, price: 200, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 699, price: 150, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 700, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 701, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 702, price: 50, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 703, price: 15, offlimits: false, category: -21, type_excluded: false },
    ObjectEntry { id: 704, price: 100, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 705, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 706, price: 60, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 707, price: 120, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 708, price: 80, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 709, price: 15, offlimits: false, category: -16, type_excluded: false },
    ObjectEntry { id: 715, price: 120, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 716, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 717, price: 100, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 718, price: 50, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 719, price: 30, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 720, price: 60, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 721, price: 65, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 722, price: 20, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 723, price: 40, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 724, price: 200, offlimits: false, category: -27, type_excluded: false },
    ObjectEntry { id: 725, price: 150, offlimits: false, category: -27, type_excluded: false },
    ObjectEntry { id: 726, price: 100, offlimits: false, category: -27, type_excluded: false },
    ObjectEntry { id: 727, price: 135, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 728, price: 175, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 729, price: 125, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 730, price: 205, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 731, price: 300, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 732, price: 275, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 733, price: 160, offlimits: false, category: -7, type_excluded: false },
    ObjectEntry { id: 734, price: 75, offlimits: false, category: -4, type_excluded: false },
    ObjectEntry { id: 749, price: 0, offlimits: false, category: 0, type_excluded: false },
    ObjectEntry { id: 766, price: 5, offlimits: false, category: -28, type_excluded: false },
    ObjectEntry { id: 767, price: 15, offlimits: false, category: -28, type_excluded: false },
    ObjectEntry { id: 768, price: 40, offlimits: false, category: -28, type_excluded: false },
    ObjectEntry { id: 769, price: 50, offlimits: false, category: -28, type_excluded: false },
    ObjectEntry { id: 771, price: 1, offlimits: false, category: -16, type_excluded: false },
    ObjectEntry { id: 772, price: 1000, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 773, price: 500, offlimits: false, category: -26, type_excluded: false },
    ObjectEntry { id: 775, price: 1000, offlimits: true, category: -4, type_excluded: false },
    ObjectEntry { id: 787, price: 500, offlimits: false, category: -16, type_excluded: false },
    ObjectEntry { id: 797, price: 2500, offlimits: false, category: 0, type_excluded: false },
    ObjectEntry { id: 812, price: 30, offlimits: false, category: -23, type_excluded: false },
    ObjectEntry { id: 820, price: 100, offlimits: false, category: 0, type_excluded: true },
    ObjectEntry { id: 831, price: 100, offlimits: false, category: -75, type_excluded: false },
    ObjectEntry { id: 833, price: 240, offlimits: false, category: -74, type_excluded: false },
    ObjectEntry { id: 835, price: 130, offlimits: false, category: -79, type_excluded: false },
];
