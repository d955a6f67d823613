//! Property identity registry for MAPI property streams.
//!
//! This module provides the [`MapiProperty`] type and the registry of well-known
//! property identities. Every record in a property stream names its property by
//! a 16-bit identifier; the registry maps those identifiers to their conventional
//! names, `PR_*` symbols, and usual value types.
//!
//! # Architecture
//!
//! The registry is a closed catalog of constants plus two escape hatches:
//!
//! - **Well-known identities** - Associated constants such as
//!   [`MapiProperty::SUBJECT`] covering the identifiers defined by the MAPI
//!   property model, indexed by [`MapiProperty::get`]
//! - **Unknown sentinel** - [`MapiProperty::UNKNOWN`] is returned for
//!   identifiers the registry does not define, so lookups never fail
//! - **Custom identities** - [`MapiProperty::create_custom`] mints identities
//!   for application-defined identifiers, typically in the custom range
//!   `0x8000..=0xFFFE`
//!
//! Identity comparison is structural on the identifier and usual type, so two
//! custom identities minted independently for the same record compare equal even
//! when their display names differ.
//!
//! # Usage Examples
//!
//! ```rust
//! use msgscope::mapi::{MapiProperty, MapiType};
//!
//! let subject = MapiProperty::get(0x0037);
//! assert_eq!(subject.name(), "Subject");
//! assert_eq!(subject.mapi_symbol(), Some("PR_SUBJECT"));
//! assert_eq!(subject.usual_type(), MapiType::STRING8);
//!
//! // Unregistered identifiers fall back to the unknown sentinel
//! assert_eq!(MapiProperty::get(0x6000), &MapiProperty::UNKNOWN);
//!
//! // Custom identities compare by identifier and type, not by name
//! let a = MapiProperty::create_custom(0x8001, MapiType::UNICODE, "VendorTag");
//! let b = MapiProperty::create_custom(0x8001, MapiType::UNICODE, "SomethingElse");
//! assert_eq!(a, b);
//! ```

use std::{
    borrow::Cow,
    cmp::Ordering,
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    sync::OnceLock,
};

use crate::mapi::types::MapiType;

/// Identifier range reserved for application-defined properties.
///
/// Identifiers in this range may be registered multiple times with different
/// types, so the registry exempts them from its duplicate check.
pub const CUSTOM_RANGE: std::ops::RangeInclusive<i32> = 0x8000..=0xFFFE;

const fn well_known(
    id: i32,
    usual_type: MapiType,
    name: &'static str,
    mapi_symbol: &'static str,
) -> MapiProperty {
    MapiProperty {
        id,
        usual_type,
        name: Cow::Borrowed(name),
        mapi_symbol: Some(mapi_symbol),
    }
}

/// A property identity, pairing an identifier with its usual value type.
///
/// `MapiProperty` describes what a property *is* independent of any particular
/// value: its 16-bit identifier, the value type it usually carries, a display
/// name, and the conventional `PR_*` symbol where one exists.
///
/// Equality, ordering, and hashing are structural on the identifier and the
/// usual type's code. The display name and symbol are informational only, which
/// lets identities minted at decode time match identities constructed by the
/// caller.
///
/// # Examples
///
/// ```rust
/// use msgscope::mapi::{MapiProperty, MapiType};
///
/// assert_eq!(MapiProperty::SUBJECT.id(), 0x0037);
/// assert_eq!(MapiProperty::MESSAGE_FLAGS.usual_type(), MapiType::INT32);
/// assert_eq!(format!("{}", MapiProperty::SUBJECT), "Subject (0x0037)");
/// ```
#[derive(Debug, Clone)]
pub struct MapiProperty {
    /// Property identifier, or `-1` for the unknown sentinel
    id: i32,
    /// Value type this property usually carries
    usual_type: MapiType,
    /// Display name of the property
    name: Cow<'static, str>,
    /// Conventional `PR_*` symbol, where one exists
    mapi_symbol: Option<&'static str>,
}

#[rustfmt::skip]
impl MapiProperty {
    /// `PR_AB_DEFAULT_DIR` (0x3D06, Binary).
    pub const AB_DEFAULT_DIR: MapiProperty =
        well_known(0x3D06, MapiType::BINARY, "AbDefaultDir", "PR_AB_DEFAULT_DIR");
    /// `PR_AB_PROVIDER_ID` (0x3615, Binary).
    pub const AB_PROVIDER_ID: MapiProperty =
        well_known(0x3615, MapiType::BINARY, "AbProviderId", "PR_AB_PROVIDER_ID");
    /// `PR_ACCESS` (0x0FF4, Int32).
    pub const ACCESS: MapiProperty =
        well_known(0x0FF4, MapiType::INT32, "Access", "PR_ACCESS");
    /// `PR_ACCESS_LEVEL` (0x0FF7, Int32).
    pub const ACCESS_LEVEL: MapiProperty =
        well_known(0x0FF7, MapiType::INT32, "AccessLevel", "PR_ACCESS_LEVEL");
    /// `PR_ACCOUNT` (0x3A00, String8).
    pub const ACCOUNT: MapiProperty =
        well_known(0x3A00, MapiType::STRING8, "Account", "PR_ACCOUNT");
    /// `PR_ADDRTYPE` (0x3002, String8) - address type such as `SMTP`.
    pub const ADDRTYPE: MapiProperty =
        well_known(0x3002, MapiType::STRING8, "Addrtype", "PR_ADDRTYPE");
    /// `PR_ALTERNATE_RECIPIENT` (0x3A01, Binary).
    pub const ALTERNATE_RECIPIENT: MapiProperty =
        well_known(0x3A01, MapiType::BINARY, "AlternateRecipient", "PR_ALTERNATE_RECIPIENT");
    /// `PR_ALTERNATE_RECIPIENT_ALLOWED` (0x0002, Boolean).
    pub const ALTERNATE_RECIPIENT_ALLOWED: MapiProperty = well_known(
        0x0002,
        MapiType::BOOLEAN,
        "AlternateRecipientAllowed",
        "PR_ALTERNATE_RECIPIENT_ALLOWED",
    );
    /// `PR_ANR` (0x360C, String8).
    pub const ANR: MapiProperty =
        well_known(0x360C, MapiType::STRING8, "Anr", "PR_ANR");
    /// `PR_ASSISTANT` (0x3A30, String8).
    pub const ASSISTANT: MapiProperty =
        well_known(0x3A30, MapiType::STRING8, "Assistant", "PR_ASSISTANT");
    /// `PR_ASSISTANT_TELEPHONE_NUMBER` (0x3A2E, String8).
    pub const ASSISTANT_TELEPHONE_NUMBER: MapiProperty = well_known(
        0x3A2E,
        MapiType::STRING8,
        "AssistantTelephoneNumber",
        "PR_ASSISTANT_TELEPHONE_NUMBER",
    );
    /// `PR_ASSOC_CONTENT_COUNT` (0x3617, Int32).
    pub const ASSOC_CONTENT_COUNT: MapiProperty =
        well_known(0x3617, MapiType::INT32, "AssocContentCount", "PR_ASSOC_CONTENT_COUNT");
    /// `PR_ATTACH_ADDITIONAL_INFO` (0x370F, Binary).
    pub const ATTACH_ADDITIONAL_INFO: MapiProperty =
        well_known(0x370F, MapiType::BINARY, "AttachAdditionalInfo", "PR_ATTACH_ADDITIONAL_INFO");
    /// `PR_ATTACH_CONTENT_BASE` (0x3711, Unknown).
    pub const ATTACH_CONTENT_BASE: MapiProperty =
        well_known(0x3711, MapiType::UNKNOWN, "AttachContentBase", "PR_ATTACH_CONTENT_BASE");
    /// `PR_ATTACH_CONTENT_ID` (0x3712, Unknown).
    pub const ATTACH_CONTENT_ID: MapiProperty =
        well_known(0x3712, MapiType::UNKNOWN, "AttachContentId", "PR_ATTACH_CONTENT_ID");
    /// `PR_ATTACH_CONTENT_LOCATION` (0x3713, Unknown).
    pub const ATTACH_CONTENT_LOCATION: MapiProperty = well_known(
        0x3713,
        MapiType::UNKNOWN,
        "AttachContentLocation",
        "PR_ATTACH_CONTENT_LOCATION",
    );
    /// `PR_ATTACH_DATA_OBJ` (0x3701, Binary) - the attachment content itself.
    pub const ATTACH_DATA: MapiProperty =
        well_known(0x3701, MapiType::BINARY, "AttachData", "PR_ATTACH_DATA_OBJ");
    /// `PR_ATTACH_DISPOSITION` (0x3716, Unknown).
    pub const ATTACH_DISPOSITION: MapiProperty =
        well_known(0x3716, MapiType::UNKNOWN, "AttachDisposition", "PR_ATTACH_DISPOSITION");
    /// `PR_ATTACH_ENCODING` (0x3702, Binary).
    pub const ATTACH_ENCODING: MapiProperty =
        well_known(0x3702, MapiType::BINARY, "AttachEncoding", "PR_ATTACH_ENCODING");
    /// `PR_ATTACH_EXTENSION` (0x3703, String8).
    pub const ATTACH_EXTENSION: MapiProperty =
        well_known(0x3703, MapiType::STRING8, "AttachExtension", "PR_ATTACH_EXTENSION");
    /// `PR_ATTACH_FILENAME` (0x3704, String8) - the 8.3 attachment file name.
    pub const ATTACH_FILENAME: MapiProperty =
        well_known(0x3704, MapiType::STRING8, "AttachFilename", "PR_ATTACH_FILENAME");
    /// `PR_ATTACH_FLAGS` (0x3714, Unknown).
    pub const ATTACH_FLAGS: MapiProperty =
        well_known(0x3714, MapiType::UNKNOWN, "AttachFlags", "PR_ATTACH_FLAGS");
    /// `PR_ATTACH_LONG_FILENAME` (0x3707, String8) - the full attachment file name.
    pub const ATTACH_LONG_FILENAME: MapiProperty =
        well_known(0x3707, MapiType::STRING8, "AttachLongFilename", "PR_ATTACH_LONG_FILENAME");
    /// `PR_ATTACH_LONG_PATHNAME` (0x370D, String8).
    pub const ATTACH_LONG_PATHNAME: MapiProperty =
        well_known(0x370D, MapiType::STRING8, "AttachLongPathname", "PR_ATTACH_LONG_PATHNAME");
    /// `PR_ATTACH_METHOD` (0x3705, Int32).
    pub const ATTACH_METHOD: MapiProperty =
        well_known(0x3705, MapiType::INT32, "AttachMethod", "PR_ATTACH_METHOD");
    /// `PR_ATTACH_MIME_SEQUENCE` (0x3710, Unknown).
    pub const ATTACH_MIME_SEQUENCE: MapiProperty =
        well_known(0x3710, MapiType::UNKNOWN, "AttachMimeSequence", "PR_ATTACH_MIME_SEQUENCE");
    /// `PR_ATTACH_MIME_TAG` (0x370E, String8) - the attachment MIME type.
    pub const ATTACH_MIME_TAG: MapiProperty =
        well_known(0x370E, MapiType::STRING8, "AttachMimeTag", "PR_ATTACH_MIME_TAG");
    /// `PR_ATTACH_NETSCAPE_MAC_INFO` (0x3715, Unknown).
    pub const ATTACH_NETSCAPE_MAC_INFO: MapiProperty = well_known(
        0x3715,
        MapiType::UNKNOWN,
        "AttachNetscapeMacInfo",
        "PR_ATTACH_NETSCAPE_MAC_INFO",
    );
    /// `PR_ATTACH_NUM` (0x0E21, Int32).
    pub const ATTACH_NUM: MapiProperty =
        well_known(0x0E21, MapiType::INT32, "AttachNum", "PR_ATTACH_NUM");
    /// `PR_ATTACH_PATHNAME` (0x3708, String8).
    pub const ATTACH_PATHNAME: MapiProperty =
        well_known(0x3708, MapiType::STRING8, "AttachPathname", "PR_ATTACH_PATHNAME");
    /// `PR_ATTACH_RENDERING` (0x3709, Binary).
    pub const ATTACH_RENDERING: MapiProperty =
        well_known(0x3709, MapiType::BINARY, "AttachRendering", "PR_ATTACH_RENDERING");
    /// `PR_ATTACH_SIZE` (0x0E20, Int32).
    pub const ATTACH_SIZE: MapiProperty =
        well_known(0x0E20, MapiType::INT32, "AttachSize", "PR_ATTACH_SIZE");
    /// `PR_ATTACH_TAG` (0x370A, Binary).
    pub const ATTACH_TAG: MapiProperty =
        well_known(0x370A, MapiType::BINARY, "AttachTag", "PR_ATTACH_TAG");
    /// `PR_ATTACH_TRANSPORT_NAME` (0x370C, String8).
    pub const ATTACH_TRANSPORT_NAME: MapiProperty =
        well_known(0x370C, MapiType::STRING8, "AttachTransportName", "PR_ATTACH_TRANSPORT_NAME");
    /// `PR_ATTACHMENT_X400_PARAMETERS` (0x3700, Binary).
    pub const ATTACHMENT_X400_PARAMETERS: MapiProperty = well_known(
        0x3700,
        MapiType::BINARY,
        "AttachmentX400Parameters",
        "PR_ATTACHMENT_X400_PARAMETERS",
    );
    /// `PR_AUTHORIZING_USERS` (0x0003, Binary).
    pub const AUTHORIZING_USERS: MapiProperty =
        well_known(0x0003, MapiType::BINARY, "AuthorizingUsers", "PR_AUTHORIZING_USERS");
    /// `PR_AUTO_FORWARD_COMMENT` (0x0004, String8).
    pub const AUTO_FORWARD_COMMENT: MapiProperty =
        well_known(0x0004, MapiType::STRING8, "AutoForwardComment", "PR_AUTO_FORWARD_COMMENT");
    /// `PR_AUTO_FORWARDED` (0x0005, Boolean).
    pub const AUTO_FORWARDED: MapiProperty =
        well_known(0x0005, MapiType::BOOLEAN, "AutoForwarded", "PR_AUTO_FORWARDED");
    /// `PR_AUTO_RESPONSE_SUPPRESS` (0x3FDF, Unknown).
    pub const AUTO_RESPONSE_SUPPRESS: MapiProperty = well_known(
        0x3FDF,
        MapiType::UNKNOWN,
        "AutoResponseSuppress",
        "PR_AUTO_RESPONSE_SUPPRESS",
    );
    /// `PR_BIRTHDAY` (0x3A42, Time).
    pub const BIRTHDAY: MapiProperty =
        well_known(0x3A42, MapiType::TIME, "Birthday", "PR_BIRTHDAY");
    /// `PR_BODY` (0x1000, String8) - the plain text message body.
    pub const BODY: MapiProperty =
        well_known(0x1000, MapiType::STRING8, "Body", "PR_BODY");
    /// `PR_BODY_CRC` (0x0E1C, Int32).
    pub const BODY_CRC: MapiProperty =
        well_known(0x0E1C, MapiType::INT32, "BodyCrc", "PR_BODY_CRC");
    /// `PR_BODY_HTML` (0x1013, Unknown) - the HTML message body.
    pub const BODY_HTML: MapiProperty =
        well_known(0x1013, MapiType::UNKNOWN, "BodyHtml", "PR_BODY_HTML");
    /// `PR_CLIENT_SUBMIT_TIME` (0x0039, Time) - when the message was submitted.
    pub const CLIENT_SUBMIT_TIME: MapiProperty =
        well_known(0x0039, MapiType::TIME, "ClientSubmitTime", "PR_CLIENT_SUBMIT_TIME");
    /// `PR_COMMENT` (0x3004, String8).
    pub const COMMENT: MapiProperty =
        well_known(0x3004, MapiType::STRING8, "Comment", "PR_COMMENT");
    /// `PR_COMPANY_NAME` (0x3A16, String8).
    pub const COMPANY_NAME: MapiProperty =
        well_known(0x3A16, MapiType::STRING8, "CompanyName", "PR_COMPANY_NAME");
    /// `PR_CONVERSATION_INDEX` (0x0071, Binary).
    pub const CONVERSATION_INDEX: MapiProperty =
        well_known(0x0071, MapiType::BINARY, "ConversationIndex", "PR_CONVERSATION_INDEX");
    /// `PR_CONVERSATION_TOPIC` (0x0070, String8).
    pub const CONVERSATION_TOPIC: MapiProperty =
        well_known(0x0070, MapiType::STRING8, "ConversationTopic", "PR_CONVERSATION_TOPIC");
    /// `PR_CREATION_TIME` (0x3007, Time).
    pub const CREATION_TIME: MapiProperty =
        well_known(0x3007, MapiType::TIME, "CreationTime", "PR_CREATION_TIME");
    /// `PR_DELETE_AFTER_SUBMIT` (0x0E01, Boolean).
    pub const DELETE_AFTER_SUBMIT: MapiProperty =
        well_known(0x0E01, MapiType::BOOLEAN, "DeleteAfterSubmit", "PR_DELETE_AFTER_SUBMIT");
    /// `PR_DISPLAY_BCC` (0x0E02, String8).
    pub const DISPLAY_BCC: MapiProperty =
        well_known(0x0E02, MapiType::STRING8, "DisplayBcc", "PR_DISPLAY_BCC");
    /// `PR_DISPLAY_CC` (0x0E03, String8).
    pub const DISPLAY_CC: MapiProperty =
        well_known(0x0E03, MapiType::STRING8, "DisplayCc", "PR_DISPLAY_CC");
    /// `PR_DISPLAY_NAME` (0x3001, String8) - the display name of the object.
    pub const DISPLAY_NAME: MapiProperty =
        well_known(0x3001, MapiType::STRING8, "DisplayName", "PR_DISPLAY_NAME");
    /// `PR_DISPLAY_NAME_PREFIX` (0x3A45, String8).
    pub const DISPLAY_NAME_PREFIX: MapiProperty =
        well_known(0x3A45, MapiType::STRING8, "DisplayNamePrefix", "PR_DISPLAY_NAME_PREFIX");
    /// `PR_DISPLAY_TO` (0x0E04, String8).
    pub const DISPLAY_TO: MapiProperty =
        well_known(0x0E04, MapiType::STRING8, "DisplayTo", "PR_DISPLAY_TO");
    /// `PR_EMAIL_ADDRESS` (0x3003, String8).
    pub const EMAIL_ADDRESS: MapiProperty =
        well_known(0x3003, MapiType::STRING8, "EmailAddress", "PR_EMAIL_ADDRESS");
    /// `PR_ENTRYID` (0x0FFF, Binary) - the object entry identifier.
    pub const ENTRY_ID: MapiProperty =
        well_known(0x0FFF, MapiType::BINARY, "EntryId", "PR_ENTRYID");
    /// `PR_GIVEN_NAME` (0x3A06, String8).
    pub const GIVEN_NAME: MapiProperty =
        well_known(0x3A06, MapiType::STRING8, "GivenName", "PR_GIVEN_NAME");
    /// `PR_HASATTACH` (0x0E1B, Boolean) - whether the message has attachments.
    pub const HAS_ATTACH: MapiProperty =
        well_known(0x0E1B, MapiType::BOOLEAN, "HasAttach", "PR_HASATTACH");
    /// `PR_IMPORTANCE` (0x0017, Int32).
    pub const IMPORTANCE: MapiProperty =
        well_known(0x0017, MapiType::INT32, "Importance", "PR_IMPORTANCE");
    /// `PR_INSTANCE_KEY` (0x0FF6, Binary).
    pub const INSTANCE_KEY: MapiProperty =
        well_known(0x0FF6, MapiType::BINARY, "InstanceKey", "PR_INSTANCE_KEY");
    /// `PR_INTERNET_ARTICLE_NUMBER` (0x0E23, Int32).
    pub const INTERNET_ARTICLE_NUMBER: MapiProperty = well_known(
        0x0E23,
        MapiType::INT32,
        "InternetArticleNumber",
        "PR_INTERNET_ARTICLE_NUMBER",
    );
    /// `PR_INTERNET_CPID` (0x3FDE, Int32) - codepage of narrow string payloads.
    pub const INTERNET_CPID: MapiProperty =
        well_known(0x3FDE, MapiType::INT32, "InternetCpid", "PR_INTERNET_CPID");
    /// `PR_INTERNET_MESSAGE_ID` (0x1035, String8).
    pub const INTERNET_MESSAGE_ID: MapiProperty =
        well_known(0x1035, MapiType::STRING8, "InternetMessageId", "PR_INTERNET_MESSAGE_ID");
    /// `PR_LAST_MODIFICATION_TIME` (0x3008, Time).
    pub const LAST_MODIFICATION_TIME: MapiProperty = well_known(
        0x3008,
        MapiType::TIME,
        "LastModificationTime",
        "PR_LAST_MODIFICATION_TIME",
    );
    /// `PR_MESSAGE_ATTACHMENTS` (0x0E13, Directory) - the nested attachment storages.
    pub const MESSAGE_ATTACHMENTS: MapiProperty =
        well_known(0x0E13, MapiType::DIRECTORY, "MessageAttachments", "PR_MESSAGE_ATTACHMENTS");
    /// `PR_MESSAGE_CC_ME` (0x0058, Boolean).
    pub const MESSAGE_CC_ME: MapiProperty =
        well_known(0x0058, MapiType::BOOLEAN, "MessageCcMe", "PR_MESSAGE_CC_ME");
    /// `PR_MESSAGE_CLASS` (0x001A, String8) - the message class such as `IPM.Note`.
    pub const MESSAGE_CLASS: MapiProperty =
        well_known(0x001A, MapiType::STRING8, "MessageClass", "PR_MESSAGE_CLASS");
    /// `PR_MESSAGE_CODEPAGE` (0x3FFD, Int32).
    pub const MESSAGE_CODEPAGE: MapiProperty =
        well_known(0x3FFD, MapiType::INT32, "MessageCodepage", "PR_MESSAGE_CODEPAGE");
    /// `PR_MESSAGE_DELIVERY_TIME` (0x0E06, Time).
    pub const MESSAGE_DELIVERY_TIME: MapiProperty =
        well_known(0x0E06, MapiType::TIME, "MessageDeliveryTime", "PR_MESSAGE_DELIVERY_TIME");
    /// `PR_MESSAGE_FLAGS` (0x0E07, Int32).
    pub const MESSAGE_FLAGS: MapiProperty =
        well_known(0x0E07, MapiType::INT32, "MessageFlags", "PR_MESSAGE_FLAGS");
    /// `PR_MESSAGE_RECIP_ME` (0x0059, Boolean).
    pub const MESSAGE_RECIP_ME: MapiProperty =
        well_known(0x0059, MapiType::BOOLEAN, "MessageRecipMe", "PR_MESSAGE_RECIP_ME");
    /// `PR_MESSAGE_RECIPIENTS` (0x0E12, Directory) - the nested recipient storages.
    pub const MESSAGE_RECIPIENTS: MapiProperty =
        well_known(0x0E12, MapiType::DIRECTORY, "MessageRecipients", "PR_MESSAGE_RECIPIENTS");
    /// `PR_MESSAGE_SIZE` (0x0E08, Int32).
    pub const MESSAGE_SIZE: MapiProperty =
        well_known(0x0E08, MapiType::INT32, "MessageSize", "PR_MESSAGE_SIZE");
    /// `PR_MESSAGE_SUBMISSION_ID` (0x0047, Binary).
    pub const MESSAGE_SUBMISSION_ID: MapiProperty = well_known(
        0x0047,
        MapiType::BINARY,
        "MessageSubmissionId",
        "PR_MESSAGE_SUBMISSION_ID",
    );
    /// `PR_MESSAGE_TO_ME` (0x0057, Boolean).
    pub const MESSAGE_TO_ME: MapiProperty =
        well_known(0x0057, MapiType::BOOLEAN, "MessageToMe", "PR_MESSAGE_TO_ME");
    /// `PR_MHS_COMMON_NAME` (0x3A0F, String8).
    pub const MHS_COMMON_NAME: MapiProperty =
        well_known(0x3A0F, MapiType::STRING8, "MhsCommonName", "PR_MHS_COMMON_NAME");
    /// `PR_NORMALIZED_SUBJECT` (0x0E1D, String8).
    pub const NORMALIZED_SUBJECT: MapiProperty =
        well_known(0x0E1D, MapiType::STRING8, "NormalizedSubject", "PR_NORMALIZED_SUBJECT");
    /// `PR_OBJECT_TYPE` (0x0FFE, Int32).
    pub const OBJECT_TYPE: MapiProperty =
        well_known(0x0FFE, MapiType::INT32, "ObjectType", "PR_OBJECT_TYPE");
    /// `PR_ORIGINAL_SENDER_NAME` (0x005A, String8).
    pub const ORIGINAL_SENDER_NAME: MapiProperty =
        well_known(0x005A, MapiType::STRING8, "OriginalSenderName", "PR_ORIGINAL_SENDER_NAME");
    /// `PR_ORIGINAL_SUBJECT` (0x0049, String8).
    pub const ORIGINAL_SUBJECT: MapiProperty =
        well_known(0x0049, MapiType::STRING8, "OriginalSubject", "PR_ORIGINAL_SUBJECT");
    /// `PR_ORIGINATOR_DELIVERY_REPORT_REQUESTED` (0x0023, Boolean).
    pub const ORIGINATOR_DELIVERY_REPORT_REQUESTED: MapiProperty = well_known(
        0x0023,
        MapiType::BOOLEAN,
        "OriginatorDeliveryReportRequested",
        "PR_ORIGINATOR_DELIVERY_REPORT_REQUESTED",
    );
    /// `PR_PRIORITY` (0x0026, Int32).
    pub const PRIORITY: MapiProperty =
        well_known(0x0026, MapiType::INT32, "Priority", "PR_PRIORITY");
    /// `PR_READ_RECEIPT_REQUESTED` (0x0029, Boolean).
    pub const READ_RECEIPT_REQUESTED: MapiProperty = well_known(
        0x0029,
        MapiType::BOOLEAN,
        "ReadReceiptRequested",
        "PR_READ_RECEIPT_REQUESTED",
    );
    /// `PR_RECEIVED_BY_ADDRTYPE` (0x0075, String8).
    pub const RECEIVED_BY_ADDRTYPE: MapiProperty =
        well_known(0x0075, MapiType::STRING8, "ReceivedByAddrtype", "PR_RECEIVED_BY_ADDRTYPE");
    /// `PR_RECEIVED_BY_EMAIL_ADDRESS` (0x0076, String8).
    pub const RECEIVED_BY_EMAIL_ADDRESS: MapiProperty = well_known(
        0x0076,
        MapiType::STRING8,
        "ReceivedByEmailAddress",
        "PR_RECEIVED_BY_EMAIL_ADDRESS",
    );
    /// `PR_RECEIVED_BY_ENTRYID` (0x003F, Binary).
    pub const RECEIVED_BY_ENTRY_ID: MapiProperty =
        well_known(0x003F, MapiType::BINARY, "ReceivedByEntryId", "PR_RECEIVED_BY_ENTRYID");
    /// `PR_RECEIVED_BY_NAME` (0x0040, String8).
    pub const RECEIVED_BY_NAME: MapiProperty =
        well_known(0x0040, MapiType::STRING8, "ReceivedByName", "PR_RECEIVED_BY_NAME");
    /// `PR_RECIPIENT_TYPE` (0x0C15, Int32).
    pub const RECIPIENT_TYPE: MapiProperty =
        well_known(0x0C15, MapiType::INT32, "RecipientType", "PR_RECIPIENT_TYPE");
    /// `PR_RECORD_KEY` (0x0FF9, Binary).
    pub const RECORD_KEY: MapiProperty =
        well_known(0x0FF9, MapiType::BINARY, "RecordKey", "PR_RECORD_KEY");
    /// `PR_REPLY_RECIPIENT_ENTRIES` (0x004F, Binary).
    pub const REPLY_RECIPIENT_ENTRIES: MapiProperty = well_known(
        0x004F,
        MapiType::BINARY,
        "ReplyRecipientEntries",
        "PR_REPLY_RECIPIENT_ENTRIES",
    );
    /// `PR_REPLY_RECIPIENT_NAMES` (0x0050, String8).
    pub const REPLY_RECIPIENT_NAMES: MapiProperty =
        well_known(0x0050, MapiType::STRING8, "ReplyRecipientNames", "PR_REPLY_RECIPIENT_NAMES");
    /// `PR_RESPONSE_REQUESTED` (0x0063, Boolean).
    pub const RESPONSE_REQUESTED: MapiProperty =
        well_known(0x0063, MapiType::BOOLEAN, "ResponseRequested", "PR_RESPONSE_REQUESTED");
    /// `PR_RTF_COMPRESSED` (0x1009, Binary) - the compressed RTF message body.
    pub const RTF_COMPRESSED: MapiProperty =
        well_known(0x1009, MapiType::BINARY, "RtfCompressed", "PR_RTF_COMPRESSED");
    /// `PR_RTF_IN_SYNC` (0x0E1F, Boolean).
    pub const RTF_IN_SYNC: MapiProperty =
        well_known(0x0E1F, MapiType::BOOLEAN, "RtfInSync", "PR_RTF_IN_SYNC");
    /// `PR_SEARCH_KEY` (0x300B, Binary).
    pub const SEARCH_KEY: MapiProperty =
        well_known(0x300B, MapiType::BINARY, "SearchKey", "PR_SEARCH_KEY");
    /// `PR_SENDER_ADDRTYPE` (0x0C1E, String8).
    pub const SENDER_ADDRTYPE: MapiProperty =
        well_known(0x0C1E, MapiType::STRING8, "SenderAddrtype", "PR_SENDER_ADDRTYPE");
    /// `PR_SENDER_EMAIL_ADDRESS` (0x0C1F, String8).
    pub const SENDER_EMAIL_ADDRESS: MapiProperty =
        well_known(0x0C1F, MapiType::STRING8, "SenderEmailAddress", "PR_SENDER_EMAIL_ADDRESS");
    /// `PR_SENDER_ENTRYID` (0x0C19, Binary).
    pub const SENDER_ENTRY_ID: MapiProperty =
        well_known(0x0C19, MapiType::BINARY, "SenderEntryId", "PR_SENDER_ENTRYID");
    /// `PR_SENDER_NAME` (0x0C1A, String8) - the display name of the sender.
    pub const SENDER_NAME: MapiProperty =
        well_known(0x0C1A, MapiType::STRING8, "SenderName", "PR_SENDER_NAME");
    /// `PR_SENDER_SEARCH_KEY` (0x0C1D, Binary).
    pub const SENDER_SEARCH_KEY: MapiProperty =
        well_known(0x0C1D, MapiType::BINARY, "SenderSearchKey", "PR_SENDER_SEARCH_KEY");
    /// `PR_SENSITIVITY` (0x0036, Int32).
    pub const SENSITIVITY: MapiProperty =
        well_known(0x0036, MapiType::INT32, "Sensitivity", "PR_SENSITIVITY");
    /// `PR_SENT_REPRESENTING_ADDRTYPE` (0x0064, String8).
    pub const SENT_REPRESENTING_ADDRTYPE: MapiProperty = well_known(
        0x0064,
        MapiType::STRING8,
        "SentRepresentingAddrtype",
        "PR_SENT_REPRESENTING_ADDRTYPE",
    );
    /// `PR_SENT_REPRESENTING_EMAIL_ADDRESS` (0x0065, String8).
    pub const SENT_REPRESENTING_EMAIL_ADDRESS: MapiProperty = well_known(
        0x0065,
        MapiType::STRING8,
        "SentRepresentingEmailAddress",
        "PR_SENT_REPRESENTING_EMAIL_ADDRESS",
    );
    /// `PR_SENT_REPRESENTING_ENTRYID` (0x0041, Binary).
    pub const SENT_REPRESENTING_ENTRY_ID: MapiProperty = well_known(
        0x0041,
        MapiType::BINARY,
        "SentRepresentingEntryId",
        "PR_SENT_REPRESENTING_ENTRYID",
    );
    /// `PR_SENT_REPRESENTING_NAME` (0x0042, String8).
    pub const SENT_REPRESENTING_NAME: MapiProperty = well_known(
        0x0042,
        MapiType::STRING8,
        "SentRepresentingName",
        "PR_SENT_REPRESENTING_NAME",
    );
    /// `PR_SENT_REPRESENTING_SEARCH_KEY` (0x003B, Binary).
    pub const SENT_REPRESENTING_SEARCH_KEY: MapiProperty = well_known(
        0x003B,
        MapiType::BINARY,
        "SentRepresentingSearchKey",
        "PR_SENT_REPRESENTING_SEARCH_KEY",
    );
    /// `PR_SMTP_ADDRESS` (0x39FE, Unicode).
    pub const SMTP_ADDRESS: MapiProperty =
        well_known(0x39FE, MapiType::UNICODE, "SmtpAddress", "PR_SMTP_ADDRESS");
    /// `PR_STORE_ENTRYID` (0x0FFB, Binary).
    pub const STORE_ENTRY_ID: MapiProperty =
        well_known(0x0FFB, MapiType::BINARY, "StoreEntryId", "PR_STORE_ENTRYID");
    /// `PR_STORE_RECORD_KEY` (0x0FFA, Binary).
    pub const STORE_RECORD_KEY: MapiProperty =
        well_known(0x0FFA, MapiType::BINARY, "StoreRecordKey", "PR_STORE_RECORD_KEY");
    /// `PR_STORE_SUPPORT_MASK` (0x340D, Int32).
    pub const STORE_SUPPORT_MASK: MapiProperty =
        well_known(0x340D, MapiType::INT32, "StoreSupportMask", "PR_STORE_SUPPORT_MASK");
    /// `PR_SUBJECT` (0x0037, String8) - the message subject text.
    pub const SUBJECT: MapiProperty =
        well_known(0x0037, MapiType::STRING8, "Subject", "PR_SUBJECT");
    /// `PR_SUBJECT_PREFIX` (0x003D, String8).
    pub const SUBJECT_PREFIX: MapiProperty =
        well_known(0x003D, MapiType::STRING8, "SubjectPrefix", "PR_SUBJECT_PREFIX");
    /// `PR_SUBMIT_FLAGS` (0x0E14, Int32).
    pub const SUBMIT_FLAGS: MapiProperty =
        well_known(0x0E14, MapiType::INT32, "SubmitFlags", "PR_SUBMIT_FLAGS");
    /// `PR_SURNAME` (0x3A11, String8).
    pub const SURNAME: MapiProperty =
        well_known(0x3A11, MapiType::STRING8, "Surname", "PR_SURNAME");
    /// `PR_TRANSPORT_MESSAGE_HEADERS` (0x007D, String8) - the raw internet headers.
    pub const TRANSPORT_MESSAGE_HEADERS: MapiProperty = well_known(
        0x007D,
        MapiType::STRING8,
        "TransportMessageHeaders",
        "PR_TRANSPORT_MESSAGE_HEADERS",
    );
    /// `PR_VALID_FOLDER_MASK` (0x35DF, Int32).
    pub const VALID_FOLDER_MASK: MapiProperty =
        well_known(0x35DF, MapiType::INT32, "ValidFolderMask", "PR_VALID_FOLDER_MASK");
    /// `PR_VIEWS_ENTRYID` (0x35E5, Binary).
    pub const VIEWS_ENTRY_ID: MapiProperty =
        well_known(0x35E5, MapiType::BINARY, "ViewsEntryId", "PR_VIEWS_ENTRYID");
    /// `PR_WEDDING_ANNIVERSARY` (0x3A41, Time).
    pub const WEDDING_ANNIVERSARY: MapiProperty =
        well_known(0x3A41, MapiType::TIME, "WeddingAnniversary", "PR_WEDDING_ANNIVERSARY");
    /// `PR_X400_CONTENT_TYPE` (0x003C, Binary).
    pub const X400_CONTENT_TYPE: MapiProperty =
        well_known(0x003C, MapiType::BINARY, "X400ContentType", "PR_X400_CONTENT_TYPE");
    /// `PR_X400_DEFERRED_DELIVERY_CANCEL` (0x3E09, Boolean).
    pub const X400_DEFERRED_DELIVERY_CANCEL: MapiProperty = well_known(
        0x3E09,
        MapiType::BOOLEAN,
        "X400DeferredDeliveryCancel",
        "PR_X400_DEFERRED_DELIVERY_CANCEL",
    );
    /// `PR_XPOS` (0x3F05, Int32).
    pub const XPOS: MapiProperty =
        well_known(0x3F05, MapiType::INT32, "XPos", "PR_XPOS");
    /// `PR_YPOS` (0x3F06, Int32).
    pub const YPOS: MapiProperty =
        well_known(0x3F06, MapiType::INT32, "YPos", "PR_YPOS");
    /// Sentinel identity for identifiers the registry does not define.
    pub const UNKNOWN: MapiProperty = MapiProperty {
        id: -1,
        usual_type: MapiType::UNKNOWN,
        name: Cow::Borrowed("Unknown"),
        mapi_symbol: None,
    };
}

/// All identities the registry defines, in identifier-name order.
static WELL_KNOWN: &[MapiProperty] = &[
    MapiProperty::AB_DEFAULT_DIR,
    MapiProperty::AB_PROVIDER_ID,
    MapiProperty::ACCESS,
    MapiProperty::ACCESS_LEVEL,
    MapiProperty::ACCOUNT,
    MapiProperty::ADDRTYPE,
    MapiProperty::ALTERNATE_RECIPIENT,
    MapiProperty::ALTERNATE_RECIPIENT_ALLOWED,
    MapiProperty::ANR,
    MapiProperty::ASSISTANT,
    MapiProperty::ASSISTANT_TELEPHONE_NUMBER,
    MapiProperty::ASSOC_CONTENT_COUNT,
    MapiProperty::ATTACH_ADDITIONAL_INFO,
    MapiProperty::ATTACH_CONTENT_BASE,
    MapiProperty::ATTACH_CONTENT_ID,
    MapiProperty::ATTACH_CONTENT_LOCATION,
    MapiProperty::ATTACH_DATA,
    MapiProperty::ATTACH_DISPOSITION,
    MapiProperty::ATTACH_ENCODING,
    MapiProperty::ATTACH_EXTENSION,
    MapiProperty::ATTACH_FILENAME,
    MapiProperty::ATTACH_FLAGS,
    MapiProperty::ATTACH_LONG_FILENAME,
    MapiProperty::ATTACH_LONG_PATHNAME,
    MapiProperty::ATTACH_METHOD,
    MapiProperty::ATTACH_MIME_SEQUENCE,
    MapiProperty::ATTACH_MIME_TAG,
    MapiProperty::ATTACH_NETSCAPE_MAC_INFO,
    MapiProperty::ATTACH_NUM,
    MapiProperty::ATTACH_PATHNAME,
    MapiProperty::ATTACH_RENDERING,
    MapiProperty::ATTACH_SIZE,
    MapiProperty::ATTACH_TAG,
    MapiProperty::ATTACH_TRANSPORT_NAME,
    MapiProperty::ATTACHMENT_X400_PARAMETERS,
    MapiProperty::AUTHORIZING_USERS,
    MapiProperty::AUTO_FORWARD_COMMENT,
    MapiProperty::AUTO_FORWARDED,
    MapiProperty::AUTO_RESPONSE_SUPPRESS,
    MapiProperty::BIRTHDAY,
    MapiProperty::BODY,
    MapiProperty::BODY_CRC,
    MapiProperty::BODY_HTML,
    MapiProperty::CLIENT_SUBMIT_TIME,
    MapiProperty::COMMENT,
    MapiProperty::COMPANY_NAME,
    MapiProperty::CONVERSATION_INDEX,
    MapiProperty::CONVERSATION_TOPIC,
    MapiProperty::CREATION_TIME,
    MapiProperty::DELETE_AFTER_SUBMIT,
    MapiProperty::DISPLAY_BCC,
    MapiProperty::DISPLAY_CC,
    MapiProperty::DISPLAY_NAME,
    MapiProperty::DISPLAY_NAME_PREFIX,
    MapiProperty::DISPLAY_TO,
    MapiProperty::EMAIL_ADDRESS,
    MapiProperty::ENTRY_ID,
    MapiProperty::GIVEN_NAME,
    MapiProperty::HAS_ATTACH,
    MapiProperty::IMPORTANCE,
    MapiProperty::INSTANCE_KEY,
    MapiProperty::INTERNET_ARTICLE_NUMBER,
    MapiProperty::INTERNET_CPID,
    MapiProperty::INTERNET_MESSAGE_ID,
    MapiProperty::LAST_MODIFICATION_TIME,
    MapiProperty::MESSAGE_ATTACHMENTS,
    MapiProperty::MESSAGE_CC_ME,
    MapiProperty::MESSAGE_CLASS,
    MapiProperty::MESSAGE_CODEPAGE,
    MapiProperty::MESSAGE_DELIVERY_TIME,
    MapiProperty::MESSAGE_FLAGS,
    MapiProperty::MESSAGE_RECIP_ME,
    MapiProperty::MESSAGE_RECIPIENTS,
    MapiProperty::MESSAGE_SIZE,
    MapiProperty::MESSAGE_SUBMISSION_ID,
    MapiProperty::MESSAGE_TO_ME,
    MapiProperty::MHS_COMMON_NAME,
    MapiProperty::NORMALIZED_SUBJECT,
    MapiProperty::OBJECT_TYPE,
    MapiProperty::ORIGINAL_SENDER_NAME,
    MapiProperty::ORIGINAL_SUBJECT,
    MapiProperty::ORIGINATOR_DELIVERY_REPORT_REQUESTED,
    MapiProperty::PRIORITY,
    MapiProperty::READ_RECEIPT_REQUESTED,
    MapiProperty::RECEIVED_BY_ADDRTYPE,
    MapiProperty::RECEIVED_BY_EMAIL_ADDRESS,
    MapiProperty::RECEIVED_BY_ENTRY_ID,
    MapiProperty::RECEIVED_BY_NAME,
    MapiProperty::RECIPIENT_TYPE,
    MapiProperty::RECORD_KEY,
    MapiProperty::REPLY_RECIPIENT_ENTRIES,
    MapiProperty::REPLY_RECIPIENT_NAMES,
    MapiProperty::RESPONSE_REQUESTED,
    MapiProperty::RTF_COMPRESSED,
    MapiProperty::RTF_IN_SYNC,
    MapiProperty::SEARCH_KEY,
    MapiProperty::SENDER_ADDRTYPE,
    MapiProperty::SENDER_EMAIL_ADDRESS,
    MapiProperty::SENDER_ENTRY_ID,
    MapiProperty::SENDER_NAME,
    MapiProperty::SENDER_SEARCH_KEY,
    MapiProperty::SENSITIVITY,
    MapiProperty::SENT_REPRESENTING_ADDRTYPE,
    MapiProperty::SENT_REPRESENTING_EMAIL_ADDRESS,
    MapiProperty::SENT_REPRESENTING_ENTRY_ID,
    MapiProperty::SENT_REPRESENTING_NAME,
    MapiProperty::SENT_REPRESENTING_SEARCH_KEY,
    MapiProperty::SMTP_ADDRESS,
    MapiProperty::STORE_ENTRY_ID,
    MapiProperty::STORE_RECORD_KEY,
    MapiProperty::STORE_SUPPORT_MASK,
    MapiProperty::SUBJECT,
    MapiProperty::SUBJECT_PREFIX,
    MapiProperty::SUBMIT_FLAGS,
    MapiProperty::SURNAME,
    MapiProperty::TRANSPORT_MESSAGE_HEADERS,
    MapiProperty::VALID_FOLDER_MASK,
    MapiProperty::VIEWS_ENTRY_ID,
    MapiProperty::WEDDING_ANNIVERSARY,
    MapiProperty::X400_CONTENT_TYPE,
    MapiProperty::X400_DEFERRED_DELIVERY_CANCEL,
    MapiProperty::XPOS,
    MapiProperty::YPOS,
    MapiProperty::UNKNOWN,
];

static UNKNOWN_PROPERTY: MapiProperty = MapiProperty::UNKNOWN;

fn catalog() -> &'static HashMap<i32, &'static MapiProperty> {
    static CATALOG: OnceLock<HashMap<i32, &'static MapiProperty>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut map = HashMap::with_capacity(WELL_KNOWN.len());
        for property in WELL_KNOWN {
            let previous = map.insert(property.id, property);
            assert!(
                previous.is_none() || CUSTOM_RANGE.contains(&property.id),
                "duplicate property registration for id 0x{:04X}",
                property.id
            );
        }
        map
    })
}

impl MapiProperty {
    /// Looks up the registered identity for a property identifier.
    ///
    /// Returns [`MapiProperty::UNKNOWN`] when the identifier is not registered,
    /// so callers always get an identity to work with.
    ///
    /// # Arguments
    /// * `id` - The property identifier to look up
    ///
    /// # Panics
    /// Panics if the registry table contains two entries with the same
    /// identifier outside [`CUSTOM_RANGE`]. This is a self-check of the
    /// compile-time table and cannot be triggered by input data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::mapi::MapiProperty;
    ///
    /// assert_eq!(MapiProperty::get(0x0037), &MapiProperty::SUBJECT);
    /// assert_eq!(MapiProperty::get(0x7AFE), &MapiProperty::UNKNOWN);
    /// ```
    #[must_use]
    pub fn get(id: i32) -> &'static MapiProperty {
        catalog().get(&id).map_or(&UNKNOWN_PROPERTY, |p| *p)
    }

    /// Returns all identities the registry defines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::mapi::MapiProperty;
    ///
    /// let count = MapiProperty::all().count();
    /// assert!(count > 100);
    /// ```
    pub fn all() -> impl Iterator<Item = &'static MapiProperty> {
        WELL_KNOWN.iter()
    }

    /// Mints an identity for an application-defined property.
    ///
    /// Intended for identifiers in [`CUSTOM_RANGE`], though any identifier is
    /// accepted. The minted identity carries no `PR_*` symbol and compares
    /// equal to any other identity with the same identifier and type.
    ///
    /// # Arguments
    /// * `id` - The property identifier
    /// * `usual_type` - The value type this property carries
    /// * `name` - A display name for the property
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::mapi::{MapiProperty, MapiType};
    ///
    /// let tag = MapiProperty::create_custom(0x8001, MapiType::UNICODE, "VendorTag");
    /// assert_eq!(tag.id(), 0x8001);
    /// assert_eq!(tag.mapi_symbol(), None);
    /// ```
    #[must_use]
    pub fn create_custom(id: i32, usual_type: MapiType, name: impl Into<String>) -> MapiProperty {
        MapiProperty {
            id,
            usual_type,
            name: Cow::Owned(name.into()),
            mapi_symbol: None,
        }
    }

    /// Returns the property identifier, or `-1` for the unknown sentinel.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Returns the value type this property usually carries.
    #[must_use]
    pub const fn usual_type(&self) -> MapiType {
        self.usual_type
    }

    /// Returns the display name of this property.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the conventional `PR_*` symbol, where one exists.
    ///
    /// Custom and unknown identities have no symbol.
    #[must_use]
    pub const fn mapi_symbol(&self) -> Option<&'static str> {
        self.mapi_symbol
    }
}

// Identity comparison is structural on identifier and type code only. Name and
// symbol are informational and must not split identities minted independently.

impl PartialEq for MapiProperty {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.usual_type.id() == other.usual_type.id()
    }
}

impl Eq for MapiProperty {}

impl Hash for MapiProperty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.usual_type.id().hash(state);
    }
}

impl PartialOrd for MapiProperty {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MapiProperty {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.usual_type.id().cmp(&other.usual_type.id()))
    }
}

impl fmt::Display for MapiProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name, self.id & 0xFFFF)
    }
}
