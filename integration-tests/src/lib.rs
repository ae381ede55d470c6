/// Loading of JSON payloads recorded from Microsoft Graph responses.
pub mod fixtures;
