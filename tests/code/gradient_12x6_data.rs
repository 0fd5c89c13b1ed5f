vec![
    0x00, 0x17, 0x2E, 0x45, 0x5C, 0x73, 0x8A, 0xA1, 0xB8, 0xCF, 0xE6, 0xFD,
    0x25, 0x3D, 0x57, 0x73, 0x91, 0xB1, 0xD3, 0xF7, 0x1D, 0x45, 0x6F, 0x9B,
    0x4A, 0x63, 0x80, 0xA1, 0xC6, 0xEF, 0x1C, 0x4D, 0x82, 0xBB, 0xF8, 0x39,
    0x6F, 0x89, 0xA9, 0xCF, 0xFB, 0x2D, 0x65, 0xA3, 0xE7, 0x31, 0x81, 0xD7,
    0x94, 0xAF, 0xD2, 0xFD, 0x30, 0x6B, 0xAE, 0xF9, 0x4C, 0xA7, 0x0A, 0x75,
    0xB9, 0xD5, 0xFB, 0x2B, 0x65, 0xA9, 0xF7, 0x4F, 0xB1, 0x1D, 0x93, 0x13,
]
