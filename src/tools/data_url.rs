use crate::error::{SaveError, SaveResult};
use base64::engine::{GeneralPurpose, general_purpose};
use base64::{Engine as _, alphabet};

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

// 標準字母表與 padding 檢查維持嚴格，只放寬最後一個字元的多餘位元
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_allow_trailing_bits(true),
);

/// `data:<mime-type>;base64,<payload>` 形式的字串，以第一個逗號切分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    header: &'a str,
    payload: &'a str,
}

impl<'a> DataUrl<'a> {
    pub fn parse(input: &'a str) -> SaveResult<Self> {
        if !input.starts_with(DATA_URL_PREFIX) {
            return Err(SaveError::MalformedDataUrl("缺少 data: 前綴"));
        }

        let (header, payload) = input
            .split_once(',')
            .ok_or(SaveError::MalformedDataUrl("找不到分隔標頭與資料的逗號"))?;

        Ok(Self { header, payload })
    }

    #[must_use]
    pub const fn header(&self) -> &'a str {
        self.header
    }

    #[must_use]
    pub const fn payload(&self) -> &'a str {
        self.payload
    }

    /// 標頭中 `data:` 與第一個 `;` 之間的 MIME 類型
    #[must_use]
    pub fn mime_type(&self) -> &'a str {
        let body = &self.header[DATA_URL_PREFIX.len()..];
        body.split_once(';').map_or(body, |(mime, _)| mime)
    }

    #[must_use]
    pub fn is_base64(&self) -> bool {
        self.header.ends_with(BASE64_MARKER)
    }

    /// 以標準字母表解碼；錯誤的 padding 或字元一律拒絕
    pub fn decode(&self) -> SaveResult<Vec<u8>> {
        Ok(BASE64.decode(self.payload)?)
    }
}
