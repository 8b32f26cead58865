//! 유니코드 한글 음절 조합/분해 (인덱스 단위)

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (실패 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    // 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
    // ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
    // ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}
