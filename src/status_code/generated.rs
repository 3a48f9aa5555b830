// This file was autogenerated from Opc.Ua.StatusCodes.csv by opcua-json-codegen
//
// DO NOT EDIT THIS FILE

use super::StatusCode;

#[allow(non_upper_case_globals)]
impl StatusCode {
    pub const Good: StatusCode = StatusCode(0x0000_0000);
    pub const GoodSubscriptionTransferred: StatusCode = StatusCode(0x002D_0000);
    pub const GoodCompletesAsynchronously: StatusCode = StatusCode(0x002E_0000);
    pub const GoodOverload: StatusCode = StatusCode(0x002F_0000);
    pub const GoodClamped: StatusCode = StatusCode(0x0030_0000);
    pub const GoodLocalOverride: StatusCode = StatusCode(0x0096_0000);
    pub const GoodEntryInserted: StatusCode = StatusCode(0x00A2_0000);
    pub const GoodEntryReplaced: StatusCode = StatusCode(0x00A3_0000);
    pub const GoodNoData: StatusCode = StatusCode(0x00A5_0000);
    pub const GoodMoreData: StatusCode = StatusCode(0x00A6_0000);
    pub const GoodCommunicationEvent: StatusCode = StatusCode(0x00A7_0000);
    pub const GoodShutdownEvent: StatusCode = StatusCode(0x00A8_0000);
    pub const GoodCallAgain: StatusCode = StatusCode(0x00A9_0000);
    pub const GoodNonCriticalTimeout: StatusCode = StatusCode(0x00AA_0000);
    pub const GoodResultsMayBeIncomplete: StatusCode = StatusCode(0x00BA_0000);
    pub const GoodDataIgnored: StatusCode = StatusCode(0x00D9_0000);
    pub const GoodEdited: StatusCode = StatusCode(0x00DC_0000);
    pub const Uncertain: StatusCode = StatusCode(0x4000_0000);
    pub const UncertainReferenceOutOfServer: StatusCode = StatusCode(0x406C_0000);
    pub const UncertainNoCommunicationLastUsableValue: StatusCode = StatusCode(0x408F_0000);
    pub const UncertainLastUsableValue: StatusCode = StatusCode(0x4090_0000);
    pub const UncertainSubstituteValue: StatusCode = StatusCode(0x4091_0000);
    pub const UncertainInitialValue: StatusCode = StatusCode(0x4092_0000);
    pub const UncertainSensorNotAccurate: StatusCode = StatusCode(0x4093_0000);
    pub const UncertainEngineeringUnitsExceeded: StatusCode = StatusCode(0x4094_0000);
    pub const UncertainSubNormal: StatusCode = StatusCode(0x4095_0000);
    pub const UncertainDataSubNormal: StatusCode = StatusCode(0x40A4_0000);
    pub const UncertainReferenceNotDeleted: StatusCode = StatusCode(0x40BC_0000);
    pub const UncertainNotAllNodesAvailable: StatusCode = StatusCode(0x40C0_0000);
    pub const Bad: StatusCode = StatusCode(0x8000_0000);
    pub const BadUnexpectedError: StatusCode = StatusCode(0x8001_0000);
    pub const BadInternalError: StatusCode = StatusCode(0x8002_0000);
    pub const BadOutOfMemory: StatusCode = StatusCode(0x8003_0000);
    pub const BadResourceUnavailable: StatusCode = StatusCode(0x8004_0000);
    pub const BadCommunicationError: StatusCode = StatusCode(0x8005_0000);
    pub const BadEncodingError: StatusCode = StatusCode(0x8006_0000);
    pub const BadDecodingError: StatusCode = StatusCode(0x8007_0000);
    pub const BadEncodingLimitsExceeded: StatusCode = StatusCode(0x8008_0000);
    pub const BadUnknownResponse: StatusCode = StatusCode(0x8009_0000);
    pub const BadTimeout: StatusCode = StatusCode(0x800A_0000);
    pub const BadServiceUnsupported: StatusCode = StatusCode(0x800B_0000);
    pub const BadShutdown: StatusCode = StatusCode(0x800C_0000);
    pub const BadServerNotConnected: StatusCode = StatusCode(0x800D_0000);
    pub const BadServerHalted: StatusCode = StatusCode(0x800E_0000);
    pub const BadNothingToDo: StatusCode = StatusCode(0x800F_0000);
    pub const BadTooManyOperations: StatusCode = StatusCode(0x8010_0000);
    pub const BadDataTypeIdUnknown: StatusCode = StatusCode(0x8011_0000);
    pub const BadCertificateInvalid: StatusCode = StatusCode(0x8012_0000);
    pub const BadSecurityChecksFailed: StatusCode = StatusCode(0x8013_0000);
    pub const BadCertificateTimeInvalid: StatusCode = StatusCode(0x8014_0000);
    pub const BadCertificateIssuerTimeInvalid: StatusCode = StatusCode(0x8015_0000);
    pub const BadCertificateHostNameInvalid: StatusCode = StatusCode(0x8016_0000);
    pub const BadCertificateUriInvalid: StatusCode = StatusCode(0x8017_0000);
    pub const BadCertificateUseNotAllowed: StatusCode = StatusCode(0x8018_0000);
    pub const BadCertificateIssuerUseNotAllowed: StatusCode = StatusCode(0x8019_0000);
    pub const BadCertificateUntrusted: StatusCode = StatusCode(0x801A_0000);
    pub const BadCertificateRevocationUnknown: StatusCode = StatusCode(0x801B_0000);
    pub const BadCertificateIssuerRevocationUnknown: StatusCode = StatusCode(0x801C_0000);
    pub const BadCertificateRevoked: StatusCode = StatusCode(0x801D_0000);
    pub const BadCertificateIssuerRevoked: StatusCode = StatusCode(0x801E_0000);
    pub const BadUserAccessDenied: StatusCode = StatusCode(0x801F_0000);
    pub const BadIdentityTokenInvalid: StatusCode = StatusCode(0x8020_0000);
    pub const BadIdentityTokenRejected: StatusCode = StatusCode(0x8021_0000);
    pub const BadSecureChannelIdInvalid: StatusCode = StatusCode(0x8022_0000);
    pub const BadInvalidTimestamp: StatusCode = StatusCode(0x8023_0000);
    pub const BadNonceInvalid: StatusCode = StatusCode(0x8024_0000);
    pub const BadSessionIdInvalid: StatusCode = StatusCode(0x8025_0000);
    pub const BadSessionClosed: StatusCode = StatusCode(0x8026_0000);
    pub const BadSessionNotActivated: StatusCode = StatusCode(0x8027_0000);
    pub const BadSubscriptionIdInvalid: StatusCode = StatusCode(0x8028_0000);
    pub const BadRequestHeaderInvalid: StatusCode = StatusCode(0x802A_0000);
    pub const BadTimestampsToReturnInvalid: StatusCode = StatusCode(0x802B_0000);
    pub const BadRequestCancelledByClient: StatusCode = StatusCode(0x802C_0000);
    pub const BadNoCommunication: StatusCode = StatusCode(0x8031_0000);
    pub const BadWaitingForInitialData: StatusCode = StatusCode(0x8032_0000);
    pub const BadNodeIdInvalid: StatusCode = StatusCode(0x8033_0000);
    pub const BadNodeIdUnknown: StatusCode = StatusCode(0x8034_0000);
    pub const BadAttributeIdInvalid: StatusCode = StatusCode(0x8035_0000);
    pub const BadIndexRangeInvalid: StatusCode = StatusCode(0x8036_0000);
    pub const BadIndexRangeNoData: StatusCode = StatusCode(0x8037_0000);
    pub const BadDataEncodingInvalid: StatusCode = StatusCode(0x8038_0000);
    pub const BadDataEncodingUnsupported: StatusCode = StatusCode(0x8039_0000);
    pub const BadNotReadable: StatusCode = StatusCode(0x803A_0000);
    pub const BadNotWritable: StatusCode = StatusCode(0x803B_0000);
    pub const BadOutOfRange: StatusCode = StatusCode(0x803C_0000);
    pub const BadNotSupported: StatusCode = StatusCode(0x803D_0000);
    pub const BadNotFound: StatusCode = StatusCode(0x803E_0000);
    pub const BadObjectDeleted: StatusCode = StatusCode(0x803F_0000);
    pub const BadNotImplemented: StatusCode = StatusCode(0x8040_0000);
    pub const BadMonitoringModeInvalid: StatusCode = StatusCode(0x8041_0000);
    pub const BadMonitoredItemIdInvalid: StatusCode = StatusCode(0x8042_0000);
    pub const BadMonitoredItemFilterInvalid: StatusCode = StatusCode(0x8043_0000);
    pub const BadMonitoredItemFilterUnsupported: StatusCode = StatusCode(0x8044_0000);
    pub const BadFilterNotAllowed: StatusCode = StatusCode(0x8045_0000);
    pub const BadStructureMissing: StatusCode = StatusCode(0x8046_0000);
    pub const BadEventFilterInvalid: StatusCode = StatusCode(0x8047_0000);
    pub const BadContentFilterInvalid: StatusCode = StatusCode(0x8048_0000);
    pub const BadFilterOperandInvalid: StatusCode = StatusCode(0x8049_0000);
    pub const BadContinuationPointInvalid: StatusCode = StatusCode(0x804A_0000);
    pub const BadNoContinuationPoints: StatusCode = StatusCode(0x804B_0000);
    pub const BadReferenceTypeIdInvalid: StatusCode = StatusCode(0x804C_0000);
    pub const BadBrowseDirectionInvalid: StatusCode = StatusCode(0x804D_0000);
    pub const BadNodeNotInView: StatusCode = StatusCode(0x804E_0000);
    pub const BadServerUriInvalid: StatusCode = StatusCode(0x804F_0000);
    pub const BadServerNameMissing: StatusCode = StatusCode(0x8050_0000);
    pub const BadDiscoveryUrlMissing: StatusCode = StatusCode(0x8051_0000);
    pub const BadSempahoreFileMissing: StatusCode = StatusCode(0x8052_0000);
    pub const BadRequestTypeInvalid: StatusCode = StatusCode(0x8053_0000);
    pub const BadSecurityModeRejected: StatusCode = StatusCode(0x8054_0000);
    pub const BadSecurityPolicyRejected: StatusCode = StatusCode(0x8055_0000);
    pub const BadTooManySessions: StatusCode = StatusCode(0x8056_0000);
    pub const BadUserSignatureInvalid: StatusCode = StatusCode(0x8057_0000);
    pub const BadApplicationSignatureInvalid: StatusCode = StatusCode(0x8058_0000);
    pub const BadNoValidCertificates: StatusCode = StatusCode(0x8059_0000);
    pub const BadIdentityChangeNotSupported: StatusCode = StatusCode(0x805A_0000);
    pub const BadRequestCancelledByRequest: StatusCode = StatusCode(0x805B_0000);
    pub const BadParentNodeIdInvalid: StatusCode = StatusCode(0x805C_0000);
    pub const BadReferenceNotAllowed: StatusCode = StatusCode(0x805D_0000);
    pub const BadNodeIdRejected: StatusCode = StatusCode(0x805E_0000);
    pub const BadNodeIdExists: StatusCode = StatusCode(0x805F_0000);
    pub const BadNodeClassInvalid: StatusCode = StatusCode(0x8060_0000);
    pub const BadBrowseNameInvalid: StatusCode = StatusCode(0x8061_0000);
    pub const BadBrowseNameDuplicated: StatusCode = StatusCode(0x8062_0000);
    pub const BadNodeAttributesInvalid: StatusCode = StatusCode(0x8063_0000);
    pub const BadTypeDefinitionInvalid: StatusCode = StatusCode(0x8064_0000);
    pub const BadSourceNodeIdInvalid: StatusCode = StatusCode(0x8065_0000);
    pub const BadTargetNodeIdInvalid: StatusCode = StatusCode(0x8066_0000);
    pub const BadDuplicateReferenceNotAllowed: StatusCode = StatusCode(0x8067_0000);
    pub const BadInvalidSelfReference: StatusCode = StatusCode(0x8068_0000);
    pub const BadReferenceLocalOnly: StatusCode = StatusCode(0x8069_0000);
    pub const BadNoDeleteRights: StatusCode = StatusCode(0x806A_0000);
    pub const BadServerIndexInvalid: StatusCode = StatusCode(0x806B_0000);
    pub const BadViewIdUnknown: StatusCode = StatusCode(0x806C_0000);
    pub const BadTooManyMatches: StatusCode = StatusCode(0x806D_0000);
    pub const BadQueryTooComplex: StatusCode = StatusCode(0x806E_0000);
    pub const BadNoMatch: StatusCode = StatusCode(0x806F_0000);
    pub const BadMaxAgeInvalid: StatusCode = StatusCode(0x8070_0000);
    pub const BadHistoryOperationInvalid: StatusCode = StatusCode(0x8071_0000);
    pub const BadHistoryOperationUnsupported: StatusCode = StatusCode(0x8072_0000);
    pub const BadWriteNotSupported: StatusCode = StatusCode(0x8073_0000);
    pub const BadTypeMismatch: StatusCode = StatusCode(0x8074_0000);
    pub const BadMethodInvalid: StatusCode = StatusCode(0x8075_0000);
    pub const BadArgumentsMissing: StatusCode = StatusCode(0x8076_0000);
    pub const BadTooManySubscriptions: StatusCode = StatusCode(0x8077_0000);
    pub const BadTooManyPublishRequests: StatusCode = StatusCode(0x8078_0000);
    pub const BadNoSubscription: StatusCode = StatusCode(0x8079_0000);
    pub const BadSequenceNumberUnknown: StatusCode = StatusCode(0x807A_0000);
    pub const BadMessageNotAvailable: StatusCode = StatusCode(0x807B_0000);
    pub const BadInsufficientClientProfile: StatusCode = StatusCode(0x807C_0000);
    pub const BadTcpServerTooBusy: StatusCode = StatusCode(0x807D_0000);
    pub const BadTcpMessageTypeInvalid: StatusCode = StatusCode(0x807E_0000);
    pub const BadTcpSecureChannelUnknown: StatusCode = StatusCode(0x807F_0000);
    pub const BadTcpMessageTooLarge: StatusCode = StatusCode(0x8080_0000);
    pub const BadTcpNotEnoughResources: StatusCode = StatusCode(0x8081_0000);
    pub const BadTcpInternalError: StatusCode = StatusCode(0x8082_0000);
    pub const BadTcpEndpointUrlInvalid: StatusCode = StatusCode(0x8083_0000);
    pub const BadRequestInterrupted: StatusCode = StatusCode(0x8084_0000);
    pub const BadRequestTimeout: StatusCode = StatusCode(0x8085_0000);
    pub const BadSecureChannelClosed: StatusCode = StatusCode(0x8086_0000);
    pub const BadSecureChannelTokenUnknown: StatusCode = StatusCode(0x8087_0000);
    pub const BadSequenceNumberInvalid: StatusCode = StatusCode(0x8088_0000);
    pub const BadConfigurationError: StatusCode = StatusCode(0x8089_0000);
    pub const BadNotConnected: StatusCode = StatusCode(0x808A_0000);
    pub const BadDeviceFailure: StatusCode = StatusCode(0x808B_0000);
    pub const BadSensorFailure: StatusCode = StatusCode(0x808C_0000);
    pub const BadOutOfService: StatusCode = StatusCode(0x808D_0000);
    pub const BadDeadbandFilterInvalid: StatusCode = StatusCode(0x808E_0000);
    pub const BadRefreshInProgress: StatusCode = StatusCode(0x8097_0000);
    pub const BadConditionAlreadyDisabled: StatusCode = StatusCode(0x8098_0000);
    pub const BadConditionDisabled: StatusCode = StatusCode(0x8099_0000);
    pub const BadEventIdUnknown: StatusCode = StatusCode(0x809A_0000);
    pub const BadNoData: StatusCode = StatusCode(0x809B_0000);
    pub const BadDataLost: StatusCode = StatusCode(0x809D_0000);
    pub const BadDataUnavailable: StatusCode = StatusCode(0x809E_0000);
    pub const BadEntryExists: StatusCode = StatusCode(0x809F_0000);
    pub const BadNoEntryExists: StatusCode = StatusCode(0x80A0_0000);
    pub const BadTimestampNotSupported: StatusCode = StatusCode(0x80A1_0000);
    pub const BadInvalidArgument: StatusCode = StatusCode(0x80AB_0000);
    pub const BadConnectionRejected: StatusCode = StatusCode(0x80AC_0000);
    pub const BadDisconnect: StatusCode = StatusCode(0x80AD_0000);
    pub const BadConnectionClosed: StatusCode = StatusCode(0x80AE_0000);
    pub const BadInvalidState: StatusCode = StatusCode(0x80AF_0000);
    pub const BadEndOfStream: StatusCode = StatusCode(0x80B0_0000);
    pub const BadNoDataAvailable: StatusCode = StatusCode(0x80B1_0000);
    pub const BadWaitingForResponse: StatusCode = StatusCode(0x80B2_0000);
    pub const BadOperationAbandoned: StatusCode = StatusCode(0x80B3_0000);
    pub const BadExpectedStreamToBlock: StatusCode = StatusCode(0x80B4_0000);
    pub const BadWouldBlock: StatusCode = StatusCode(0x80B5_0000);
    pub const BadSyntaxError: StatusCode = StatusCode(0x80B6_0000);
    pub const BadMaxConnectionsReached: StatusCode = StatusCode(0x80B7_0000);
    pub const BadRequestTooLarge: StatusCode = StatusCode(0x80B8_0000);
    pub const BadResponseTooLarge: StatusCode = StatusCode(0x80B9_0000);
    pub const BadAggregateListMismatch: StatusCode = StatusCode(0x80D4_0000);
    pub const BadAggregateNotSupported: StatusCode = StatusCode(0x80D5_0000);
    pub const BadAggregateInvalidInputs: StatusCode = StatusCode(0x80D6_0000);
    pub const BadAggregateConfigurationRejected: StatusCode = StatusCode(0x80DA_0000);
}

/// Symbolic names of the well-known status codes, sorted by numeric value.
pub(super) const STATUS_CODE_SYMBOLS: &[(u32, &str)] = &[
    (0x0000_0000, "Good"),
    (0x002D_0000, "Good_SubscriptionTransferred"),
    (0x002E_0000, "Good_CompletesAsynchronously"),
    (0x002F_0000, "Good_Overload"),
    (0x0030_0000, "Good_Clamped"),
    (0x0096_0000, "Good_LocalOverride"),
    (0x00A2_0000, "Good_EntryInserted"),
    (0x00A3_0000, "Good_EntryReplaced"),
    (0x00A5_0000, "Good_NoData"),
    (0x00A6_0000, "Good_MoreData"),
    (0x00A7_0000, "Good_CommunicationEvent"),
    (0x00A8_0000, "Good_ShutdownEvent"),
    (0x00A9_0000, "Good_CallAgain"),
    (0x00AA_0000, "Good_NonCriticalTimeout"),
    (0x00BA_0000, "Good_ResultsMayBeIncomplete"),
    (0x00D9_0000, "Good_DataIgnored"),
    (0x00DC_0000, "Good_Edited"),
    (0x4000_0000, "Uncertain"),
    (0x406C_0000, "Uncertain_ReferenceOutOfServer"),
    (0x408F_0000, "Uncertain_NoCommunicationLastUsableValue"),
    (0x4090_0000, "Uncertain_LastUsableValue"),
    (0x4091_0000, "Uncertain_SubstituteValue"),
    (0x4092_0000, "Uncertain_InitialValue"),
    (0x4093_0000, "Uncertain_SensorNotAccurate"),
    (0x4094_0000, "Uncertain_EngineeringUnitsExceeded"),
    (0x4095_0000, "Uncertain_SubNormal"),
    (0x40A4_0000, "Uncertain_DataSubNormal"),
    (0x40BC_0000, "Uncertain_ReferenceNotDeleted"),
    (0x40C0_0000, "Uncertain_NotAllNodesAvailable"),
    (0x8000_0000, "Bad"),
    (0x8001_0000, "Bad_UnexpectedError"),
    (0x8002_0000, "Bad_InternalError"),
    (0x8003_0000, "Bad_OutOfMemory"),
    (0x8004_0000, "Bad_ResourceUnavailable"),
    (0x8005_0000, "Bad_CommunicationError"),
    (0x8006_0000, "Bad_EncodingError"),
    (0x8007_0000, "Bad_DecodingError"),
    (0x8008_0000, "Bad_EncodingLimitsExceeded"),
    (0x8009_0000, "Bad_UnknownResponse"),
    (0x800A_0000, "Bad_Timeout"),
    (0x800B_0000, "Bad_ServiceUnsupported"),
    (0x800C_0000, "Bad_Shutdown"),
    (0x800D_0000, "Bad_ServerNotConnected"),
    (0x800E_0000, "Bad_ServerHalted"),
    (0x800F_0000, "Bad_NothingToDo"),
    (0x8010_0000, "Bad_TooManyOperations"),
    (0x8011_0000, "Bad_DataTypeIdUnknown"),
    (0x8012_0000, "Bad_CertificateInvalid"),
    (0x8013_0000, "Bad_SecurityChecksFailed"),
    (0x8014_0000, "Bad_CertificateTimeInvalid"),
    (0x8015_0000, "Bad_CertificateIssuerTimeInvalid"),
    (0x8016_0000, "Bad_CertificateHostNameInvalid"),
    (0x8017_0000, "Bad_CertificateUriInvalid"),
    (0x8018_0000, "Bad_CertificateUseNotAllowed"),
    (0x8019_0000, "Bad_CertificateIssuerUseNotAllowed"),
    (0x801A_0000, "Bad_CertificateUntrusted"),
    (0x801B_0000, "Bad_CertificateRevocationUnknown"),
    (0x801C_0000, "Bad_CertificateIssuerRevocationUnknown"),
    (0x801D_0000, "Bad_CertificateRevoked"),
    (0x801E_0000, "Bad_CertificateIssuerRevoked"),
    (0x801F_0000, "Bad_UserAccessDenied"),
    (0x8020_0000, "Bad_IdentityTokenInvalid"),
    (0x8021_0000, "Bad_IdentityTokenRejected"),
    (0x8022_0000, "Bad_SecureChannelIdInvalid"),
    (0x8023_0000, "Bad_InvalidTimestamp"),
    (0x8024_0000, "Bad_NonceInvalid"),
    (0x8025_0000, "Bad_SessionIdInvalid"),
    (0x8026_0000, "Bad_SessionClosed"),
    (0x8027_0000, "Bad_SessionNotActivated"),
    (0x8028_0000, "Bad_SubscriptionIdInvalid"),
    (0x802A_0000, "Bad_RequestHeaderInvalid"),
    (0x802B_0000, "Bad_TimestampsToReturnInvalid"),
    (0x802C_0000, "Bad_RequestCancelledByClient"),
    (0x8031_0000, "Bad_NoCommunication"),
    (0x8032_0000, "Bad_WaitingForInitialData"),
    (0x8033_0000, "Bad_NodeIdInvalid"),
    (0x8034_0000, "Bad_NodeIdUnknown"),
    (0x8035_0000, "Bad_AttributeIdInvalid"),
    (0x8036_0000, "Bad_IndexRangeInvalid"),
    (0x8037_0000, "Bad_IndexRangeNoData"),
    (0x8038_0000, "Bad_DataEncodingInvalid"),
    (0x8039_0000, "Bad_DataEncodingUnsupported"),
    (0x803A_0000, "Bad_NotReadable"),
    (0x803B_0000, "Bad_NotWritable"),
    (0x803C_0000, "Bad_OutOfRange"),
    (0x803D_0000, "Bad_NotSupported"),
    (0x803E_0000, "Bad_NotFound"),
    (0x803F_0000, "Bad_ObjectDeleted"),
    (0x8040_0000, "Bad_NotImplemented"),
    (0x8041_0000, "Bad_MonitoringModeInvalid"),
    (0x8042_0000, "Bad_MonitoredItemIdInvalid"),
    (0x8043_0000, "Bad_MonitoredItemFilterInvalid"),
    (0x8044_0000, "Bad_MonitoredItemFilterUnsupported"),
    (0x8045_0000, "Bad_FilterNotAllowed"),
    (0x8046_0000, "Bad_StructureMissing"),
    (0x8047_0000, "Bad_EventFilterInvalid"),
    (0x8048_0000, "Bad_ContentFilterInvalid"),
    (0x8049_0000, "Bad_FilterOperandInvalid"),
    (0x804A_0000, "Bad_ContinuationPointInvalid"),
    (0x804B_0000, "Bad_NoContinuationPoints"),
    (0x804C_0000, "Bad_ReferenceTypeIdInvalid"),
    (0x804D_0000, "Bad_BrowseDirectionInvalid"),
    (0x804E_0000, "Bad_NodeNotInView"),
    (0x804F_0000, "Bad_ServerUriInvalid"),
    (0x8050_0000, "Bad_ServerNameMissing"),
    (0x8051_0000, "Bad_DiscoveryUrlMissing"),
    (0x8052_0000, "Bad_SempahoreFileMissing"),
    (0x8053_0000, "Bad_RequestTypeInvalid"),
    (0x8054_0000, "Bad_SecurityModeRejected"),
    (0x8055_0000, "Bad_SecurityPolicyRejected"),
    (0x8056_0000, "Bad_TooManySessions"),
    (0x8057_0000, "Bad_UserSignatureInvalid"),
    (0x8058_0000, "Bad_ApplicationSignatureInvalid"),
    (0x8059_0000, "Bad_NoValidCertificates"),
    (0x805A_0000, "Bad_IdentityChangeNotSupported"),
    (0x805B_0000, "Bad_RequestCancelledByRequest"),
    (0x805C_0000, "Bad_ParentNodeIdInvalid"),
    (0x805D_0000, "Bad_ReferenceNotAllowed"),
    (0x805E_0000, "Bad_NodeIdRejected"),
    (0x805F_0000, "Bad_NodeIdExists"),
    (0x8060_0000, "Bad_NodeClassInvalid"),
    (0x8061_0000, "Bad_BrowseNameInvalid"),
    (0x8062_0000, "Bad_BrowseNameDuplicated"),
    (0x8063_0000, "Bad_NodeAttributesInvalid"),
    (0x8064_0000, "Bad_TypeDefinitionInvalid"),
    (0x8065_0000, "Bad_SourceNodeIdInvalid"),
    (0x8066_0000, "Bad_TargetNodeIdInvalid"),
    (0x8067_0000, "Bad_DuplicateReferenceNotAllowed"),
    (0x8068_0000, "Bad_InvalidSelfReference"),
    (0x8069_0000, "Bad_ReferenceLocalOnly"),
    (0x806A_0000, "Bad_NoDeleteRights"),
    (0x806B_0000, "Bad_ServerIndexInvalid"),
    (0x806C_0000, "Bad_ViewIdUnknown"),
    (0x806D_0000, "Bad_TooManyMatches"),
    (0x806E_0000, "Bad_QueryTooComplex"),
    (0x806F_0000, "Bad_NoMatch"),
    (0x8070_0000, "Bad_MaxAgeInvalid"),
    (0x8071_0000, "Bad_HistoryOperationInvalid"),
    (0x8072_0000, "Bad_HistoryOperationUnsupported"),
    (0x8073_0000, "Bad_WriteNotSupported"),
    (0x8074_0000, "Bad_TypeMismatch"),
    (0x8075_0000, "Bad_MethodInvalid"),
    (0x8076_0000, "Bad_ArgumentsMissing"),
    (0x8077_0000, "Bad_TooManySubscriptions"),
    (0x8078_0000, "Bad_TooManyPublishRequests"),
    (0x8079_0000, "Bad_NoSubscription"),
    (0x807A_0000, "Bad_SequenceNumberUnknown"),
    (0x807B_0000, "Bad_MessageNotAvailable"),
    (0x807C_0000, "Bad_InsufficientClientProfile"),
    (0x807D_0000, "Bad_TcpServerTooBusy"),
    (0x807E_0000, "Bad_TcpMessageTypeInvalid"),
    (0x807F_0000, "Bad_TcpSecureChannelUnknown"),
    (0x8080_0000, "Bad_TcpMessageTooLarge"),
    (0x8081_0000, "Bad_TcpNotEnoughResources"),
    (0x8082_0000, "Bad_TcpInternalError"),
    (0x8083_0000, "Bad_TcpEndpointUrlInvalid"),
    (0x8084_0000, "Bad_RequestInterrupted"),
    (0x8085_0000, "Bad_RequestTimeout"),
    (0x8086_0000, "Bad_SecureChannelClosed"),
    (0x8087_0000, "Bad_SecureChannelTokenUnknown"),
    (0x8088_0000, "Bad_SequenceNumberInvalid"),
    (0x8089_0000, "Bad_ConfigurationError"),
    (0x808A_0000, "Bad_NotConnected"),
    (0x808B_0000, "Bad_DeviceFailure"),
    (0x808C_0000, "Bad_SensorFailure"),
    (0x808D_0000, "Bad_OutOfService"),
    (0x808E_0000, "Bad_DeadbandFilterInvalid"),
    (0x8097_0000, "Bad_RefreshInProgress"),
    (0x8098_0000, "Bad_ConditionAlreadyDisabled"),
    (0x8099_0000, "Bad_ConditionDisabled"),
    (0x809A_0000, "Bad_EventIdUnknown"),
    (0x809B_0000, "Bad_NoData"),
    (0x809D_0000, "Bad_DataLost"),
    (0x809E_0000, "Bad_DataUnavailable"),
    (0x809F_0000, "Bad_EntryExists"),
    (0x80A0_0000, "Bad_NoEntryExists"),
    (0x80A1_0000, "Bad_TimestampNotSupported"),
    (0x80AB_0000, "Bad_InvalidArgument"),
    (0x80AC_0000, "Bad_ConnectionRejected"),
    (0x80AD_0000, "Bad_Disconnect"),
    (0x80AE_0000, "Bad_ConnectionClosed"),
    (0x80AF_0000, "Bad_InvalidState"),
    (0x80B0_0000, "Bad_EndOfStream"),
    (0x80B1_0000, "Bad_NoDataAvailable"),
    (0x80B2_0000, "Bad_WaitingForResponse"),
    (0x80B3_0000, "Bad_OperationAbandoned"),
    (0x80B4_0000, "Bad_ExpectedStreamToBlock"),
    (0x80B5_0000, "Bad_WouldBlock"),
    (0x80B6_0000, "Bad_SyntaxError"),
    (0x80B7_0000, "Bad_MaxConnectionsReached"),
    (0x80B8_0000, "Bad_RequestTooLarge"),
    (0x80B9_0000, "Bad_ResponseTooLarge"),
    (0x80D4_0000, "Bad_AggregateListMismatch"),
    (0x80D5_0000, "Bad_AggregateNotSupported"),
    (0x80D6_0000, "Bad_AggregateInvalidInputs"),
    (0x80DA_0000, "Bad_AggregateConfigurationRejected"),
];
