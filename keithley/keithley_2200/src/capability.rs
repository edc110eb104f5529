//! The table of all instrument capabilities.
//!
//! Each [`Capability`] maps onto one SCPI header. Its [`CapabilitySpec`] says whether it can be
//! written, queried, or both, and which rule every parameter must satisfy. The table is static,
//! the driver only ever reads from it.

use crate::{
    models::Quantity,
    rules::{Bound, Rule, ToggleForm},
    units::BaseUnit,
};

/// Whether a capability can be written, queried, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Command only, e.g. `*RST`.
    Write,
    /// Query only, e.g. `MEAS:VOLT?`.
    Query,
    /// Setting that can be written and read back, e.g. `VOLT`.
    Both,
}

impl Access {
    /// Can the capability be written?
    pub fn writable(&self) -> bool {
        matches!(self, Access::Write | Access::Both)
    }

    /// Can the capability be queried?
    pub fn queryable(&self) -> bool {
        matches!(self, Access::Query | Access::Both)
    }
}

/// A named parameter of a capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// Name of the parameter, as used in the SCPI reference.
    pub name: &'static str,
    /// The rule arguments for this parameter are checked against.
    pub rule: Rule,
}

/// Everything the driver needs to know about a capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapabilitySpec {
    /// SCPI header without question mark, e.g. `VOLT:PROT`.
    pub header: &'static str,
    /// Whether the capability can be written and/or queried.
    pub access: Access,
    /// Parameters of the write form, in order.
    pub params: &'static [Param],
    /// How many of the leading parameters are sent along with the query form.
    pub query_params: usize,
}

impl CapabilitySpec {
    const fn new(header: &'static str, access: Access, params: &'static [Param]) -> Self {
        CapabilitySpec {
            header,
            access,
            params,
            query_params: 0,
        }
    }

    /// Capability whose query form takes the leading step index, e.g. `LIST:VOLT? 3`.
    const fn indexed(header: &'static str, params: &'static [Param]) -> Self {
        CapabilitySpec {
            header,
            access: Access::Both,
            params,
            query_params: 1,
        }
    }
}

const MIN_MAX: &[&str] = &["MIN", "MAX"];
const MIN_MAX_DEF: &[&str] = &["MIN", "MAX", "DEF"];
const NO_SYMBOLS: &[&str] = &[];

const fn param(name: &'static str, rule: Rule) -> Param {
    Param { name, rule }
}

const fn int(allowed: &'static [(i64, i64)]) -> Rule {
    Rule::Integer {
        allowed,
        symbols: NO_SYMBOLS,
    }
}

const NO_PARAMS: &[Param] = &[];
const TOGGLE: &[Param] = &[param("state", Rule::Toggle(ToggleForm::Word))];
const REGISTER: &[Param] = &[param("bits", int(&[(0, 255)]))];
const PSC_FLAG: &[Param] = &[param("flag", int(&[(0, 1)]))];
const RECALL_MEMORY: &[Param] = &[param("memory", int(&[(0, 40)]))];
const SAVE_MEMORY: &[Param] = &[param("memory", int(&[(1, 40)]))];
const LIST_MEMORY: &[Param] = &[param("memory", int(&[(1, 8)]))];
const LIST_COUNT: &[Param] = &[param("count", int(&[(2, 65535)]))];
const STEP: Param = param("step", int(&[(1, 80)]));
const POWER_ON: &[Param] = &[param("state", Rule::Token(&["RST", "RCL0"]))];

/// All capabilities of the Keithley 2200 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `*CLS`: clear all event registers and the error queue.
    ClearStatus,
    /// `CONF:SOUN`: key beep on or off.
    Beep,
    /// `*ESE`: Standard Event Status Enable register.
    EventStatusEnable,
    /// `*ESR?`: Standard Event Status register.
    EventStatusRegister,
    /// `FETC:CURR?`: last measured current, no new measurement.
    FetchCurrent,
    /// `FETC:VOLT?`: last measured voltage, no new measurement.
    FetchVoltage,
    /// `FETC:POW?`: last measured power, no new measurement.
    FetchPower,
    /// `*IDN?`: identification string.
    Identify,
    /// `MEAS:CURR?`: measure the output current.
    MeasureCurrent,
    /// `MEAS:VOLT?`: measure the output voltage.
    MeasureVoltage,
    /// `MEAS:POW?`: measure the output power.
    MeasurePower,
    /// `*OPC`: set the operation complete bit when pending commands are done; `*OPC?` waits.
    OperationComplete,
    /// `*PSC`: power-on status clear flag.
    PowerOnStatusClear,
    /// `*RCL`: recall a setup from memory 0 to 40.
    RecallSetup,
    /// `*RST`: reset to default settings.
    Reset,
    /// `*SAV`: save the setup to memory 1 to 40.
    SaveSetup,
    /// `CURR`: current setpoint.
    Current,
    /// `DIG:DATA`: output level of the rear panel TTL line.
    TtlLevel,
    /// `DIG:FUNC`: function of the rear panel TTL lines.
    DigitalFunction,
    /// `FUNC:MODE`: fixed or list mode.
    FunctionMode,
    /// `LIST:COUN`: number of times the list is repeated.
    ListCount,
    /// `LIST:CURR`: current of a list step.
    ListCurrent,
    /// `LIST:MODE`: run the list continuously or step by step.
    ListMode,
    /// `LIST:RCL`: recall a list from memory 1 to 8.
    ListRecall,
    /// `LIST:SAV`: save the list to memory 1 to 8.
    ListSave,
    /// `LIST:STEP`: number of steps in the active list.
    ListSteps,
    /// `LIST:VOLT`: voltage of a list step.
    ListVoltage,
    /// `LIST:WIDT`: duration of a list step.
    ListWidth,
    /// `OUTP:DFI:SOUR`: status bit that drives the DFI output.
    DfiSource,
    /// `OUTP:PON`: output state after power on.
    PowerOnState,
    /// `OUTP:PROT:CLE`: clear a tripped protection.
    ClearProtection,
    /// `OUTP:RI:MODE`: mode of the remote inhibit pin.
    RiMode,
    /// `OUTP`: output on or off.
    Output,
    /// `OUTP:TIM:DEL`: duration of the output timer.
    TimerDelay,
    /// `OUTP:TIM`: output timer on or off.
    Timer,
    /// `VOLT`: voltage setpoint.
    Voltage,
    /// `VOLT:PROT`: over voltage protection level.
    OverVoltageProtection,
    /// `VOLT:PROT:STAT`: over voltage protection on or off.
    OverVoltageProtectionState,
    /// `VOLT:RANG`: maximum voltage that can be programmed.
    VoltageLimit,
    /// `*SRE`: Service Request Enable register.
    ServiceRequestEnable,
    /// `*STB?`: Status Byte register.
    StatusByte,
    /// `STAT:OPER:COND?`: Operation Condition register.
    OperationCondition,
    /// `STAT:OPER:ENAB`: Operation Enable register.
    OperationEnable,
    /// `STAT:OPER?`: Operation Event register.
    OperationEvent,
    /// `STAT:QUES:COND?`: Questionable Condition register.
    QuestionableCondition,
    /// `STAT:QUES:ENAB`: Questionable Enable register.
    QuestionableEnable,
    /// `STAT:QUES?`: Questionable Event register.
    QuestionableEvent,
    /// `STAT:QUES:NTR`: Questionable negative transition filter.
    QuestionableNtr,
    /// `STAT:QUES:PTR`: Questionable positive transition filter.
    QuestionablePtr,
    /// `SYST:ERR?`: next entry of the error queue.
    Error,
    /// `SYST:KEY`: simulate a front panel key press.
    Key,
    /// `SYST:LOC`: front panel control.
    Local,
    /// `SYST:POS`: settings after power on.
    SystemPowerOnState,
    /// `SYST:REM`: remote control.
    Remote,
    /// `SYST:RWL`: remote control with the LOCAL key locked out.
    RemoteLock,
    /// `SYST:VER?`: SCPI version.
    ScpiVersion,
    /// `*TRG`: bus trigger.
    Trigger,
    /// `TRIG`: trigger immediately, regardless of the trigger source.
    ForceTrigger,
    /// `TRIG:SOUR`: trigger source.
    TriggerSource,
    /// `*TST?`: self test.
    SelfTest,
    /// `*WAI`: wait until pending commands are done.
    Wait,
}

impl Capability {
    /// All capabilities, in table order.
    pub const ALL: &'static [Capability] = &[
        Capability::ClearStatus,
        Capability::Beep,
        Capability::EventStatusEnable,
        Capability::EventStatusRegister,
        Capability::FetchCurrent,
        Capability::FetchVoltage,
        Capability::FetchPower,
        Capability::Identify,
        Capability::MeasureCurrent,
        Capability::MeasureVoltage,
        Capability::MeasurePower,
        Capability::OperationComplete,
        Capability::PowerOnStatusClear,
        Capability::RecallSetup,
        Capability::Reset,
        Capability::SaveSetup,
        Capability::Current,
        Capability::TtlLevel,
        Capability::DigitalFunction,
        Capability::FunctionMode,
        Capability::ListCount,
        Capability::ListCurrent,
        Capability::ListMode,
        Capability::ListRecall,
        Capability::ListSave,
        Capability::ListSteps,
        Capability::ListVoltage,
        Capability::ListWidth,
        Capability::DfiSource,
        Capability::PowerOnState,
        Capability::ClearProtection,
        Capability::RiMode,
        Capability::Output,
        Capability::TimerDelay,
        Capability::Timer,
        Capability::Voltage,
        Capability::OverVoltageProtection,
        Capability::OverVoltageProtectionState,
        Capability::VoltageLimit,
        Capability::ServiceRequestEnable,
        Capability::StatusByte,
        Capability::OperationCondition,
        Capability::OperationEnable,
        Capability::OperationEvent,
        Capability::QuestionableCondition,
        Capability::QuestionableEnable,
        Capability::QuestionableEvent,
        Capability::QuestionableNtr,
        Capability::QuestionablePtr,
        Capability::Error,
        Capability::Key,
        Capability::Local,
        Capability::SystemPowerOnState,
        Capability::Remote,
        Capability::RemoteLock,
        Capability::ScpiVersion,
        Capability::Trigger,
        Capability::ForceTrigger,
        Capability::TriggerSource,
        Capability::SelfTest,
        Capability::Wait,
    ];

    /// The table entry of this capability.
    pub const fn spec(self) -> CapabilitySpec {
        use Access::{Both, Query, Write};

        match self {
            Capability::ClearStatus => CapabilitySpec::new("*CLS", Write, NO_PARAMS),
            Capability::Beep => CapabilitySpec::new("CONF:SOUN", Both, TOGGLE),
            Capability::EventStatusEnable => CapabilitySpec::new("*ESE", Both, REGISTER),
            Capability::EventStatusRegister => CapabilitySpec::new("*ESR", Query, NO_PARAMS),
            Capability::FetchCurrent => CapabilitySpec::new("FETC:CURR", Query, NO_PARAMS),
            Capability::FetchVoltage => CapabilitySpec::new("FETC:VOLT", Query, NO_PARAMS),
            Capability::FetchPower => CapabilitySpec::new("FETC:POW", Query, NO_PARAMS),
            Capability::Identify => CapabilitySpec::new("*IDN", Query, NO_PARAMS),
            Capability::MeasureCurrent => CapabilitySpec::new("MEAS:CURR", Query, NO_PARAMS),
            Capability::MeasureVoltage => CapabilitySpec::new("MEAS:VOLT", Query, NO_PARAMS),
            Capability::MeasurePower => CapabilitySpec::new("MEAS:POW", Query, NO_PARAMS),
            Capability::OperationComplete => CapabilitySpec::new("*OPC", Both, NO_PARAMS),
            Capability::PowerOnStatusClear => CapabilitySpec::new("*PSC", Both, PSC_FLAG),
            Capability::RecallSetup => CapabilitySpec::new("*RCL", Write, RECALL_MEMORY),
            Capability::Reset => CapabilitySpec::new("*RST", Write, NO_PARAMS),
            Capability::SaveSetup => CapabilitySpec::new("*SAV", Write, SAVE_MEMORY),
            Capability::Current => CapabilitySpec::new(
                "CURR",
                Both,
                const {
                    &[param(
                        "current",
                        Rule::Numeric {
                            unit: BaseUnit::Ampere,
                            bound: Bound::Model(Quantity::Current),
                            symbols: MIN_MAX_DEF,
                        },
                    )]
                },
            ),
            Capability::TtlLevel => CapabilitySpec::new(
                "DIG:DATA",
                Both,
                const { &[param("level", Rule::Toggle(ToggleForm::Digit))] },
            ),
            Capability::DigitalFunction => CapabilitySpec::new(
                "DIG:FUNC",
                Both,
                const {
                    &[param(
                        "function",
                        Rule::Token(&["TRIG", "TRIGGER", "RIDFI", "RIDF", "DIG", "DIGITAL"]),
                    )]
                },
            ),
            Capability::FunctionMode => CapabilitySpec::new(
                "FUNC:MODE",
                Both,
                const { &[param("mode", Rule::Token(&["FIX", "FIXED", "LIST"]))] },
            ),
            Capability::ListCount => CapabilitySpec::new("LIST:COUN", Both, LIST_COUNT),
            Capability::ListCurrent => CapabilitySpec::indexed(
                "LIST:CURR",
                const {
                    &[
                        STEP,
                        param(
                            "current",
                            Rule::Numeric {
                                unit: BaseUnit::Ampere,
                                bound: Bound::Model(Quantity::Current),
                                symbols: NO_SYMBOLS,
                            },
                        ),
                    ]
                },
            ),
            Capability::ListMode => CapabilitySpec::new(
                "LIST:MODE",
                Both,
                const { &[param("mode", Rule::Token(&["CONT", "CONTINUED", "STEP"]))] },
            ),
            Capability::ListRecall => CapabilitySpec::new("LIST:RCL", Write, LIST_MEMORY),
            Capability::ListSave => CapabilitySpec::new("LIST:SAV", Write, LIST_MEMORY),
            Capability::ListSteps => CapabilitySpec::new(
                "LIST:STEP",
                Both,
                const {
                    &[param(
                        "steps",
                        Rule::Integer {
                            allowed: &[(2, 80)],
                            symbols: MIN_MAX,
                        },
                    )]
                },
            ),
            Capability::ListVoltage => CapabilitySpec::indexed(
                "LIST:VOLT",
                const {
                    &[
                        STEP,
                        param(
                            "voltage",
                            Rule::Numeric {
                                unit: BaseUnit::Volt,
                                bound: Bound::Model(Quantity::Voltage),
                                symbols: NO_SYMBOLS,
                            },
                        ),
                    ]
                },
            ),
            Capability::ListWidth => CapabilitySpec::indexed(
                "LIST:WIDT",
                const {
                    &[
                        STEP,
                        param(
                            "width",
                            Rule::Numeric {
                                unit: BaseUnit::Second,
                                bound: Bound::AtLeast(0.0),
                                symbols: MIN_MAX,
                            },
                        ),
                    ]
                },
            ),
            Capability::DfiSource => CapabilitySpec::new(
                "OUTP:DFI:SOUR",
                Both,
                const {
                    &[param(
                        "source",
                        Rule::Token(&["OFF", "QUES", "OPER", "ESB", "RQS"]),
                    )]
                },
            ),
            Capability::PowerOnState => CapabilitySpec::new("OUTP:PON", Both, POWER_ON),
            Capability::ClearProtection => CapabilitySpec::new("OUTP:PROT:CLE", Write, NO_PARAMS),
            Capability::RiMode => CapabilitySpec::new(
                "OUTP:RI:MODE",
                Both,
                const {
                    &[param(
                        "mode",
                        Rule::Token(&["OFF", "LATC", "LATCHING", "LIVE"]),
                    )]
                },
            ),
            Capability::Output => CapabilitySpec::new("OUTP", Both, TOGGLE),
            Capability::TimerDelay => CapabilitySpec::new(
                "OUTP:TIM:DEL",
                Both,
                const {
                    &[param(
                        "delay",
                        Rule::Numeric {
                            unit: BaseUnit::Second,
                            bound: Bound::Fixed {
                                min: 0.01,
                                max: 60000.0,
                            },
                            symbols: MIN_MAX_DEF,
                        },
                    )]
                },
            ),
            Capability::Timer => CapabilitySpec::new("OUTP:TIM", Both, TOGGLE),
            // Fixed at 30 V for every model, unlike the list step voltage.
            Capability::Voltage => CapabilitySpec::new(
                "VOLT",
                Both,
                const {
                    &[param(
                        "voltage",
                        Rule::Numeric {
                            unit: BaseUnit::Volt,
                            bound: Bound::Fixed {
                                min: 0.0,
                                max: 30.0,
                            },
                            symbols: MIN_MAX_DEF,
                        },
                    )]
                },
            ),
            Capability::OverVoltageProtection => CapabilitySpec::new(
                "VOLT:PROT",
                Both,
                const {
                    &[param(
                        "level",
                        Rule::Numeric {
                            unit: BaseUnit::Volt,
                            bound: Bound::Fixed {
                                min: 0.0,
                                max: 30.0,
                            },
                            symbols: MIN_MAX,
                        },
                    )]
                },
            ),
            Capability::OverVoltageProtectionState => {
                CapabilitySpec::new("VOLT:PROT:STAT", Both, TOGGLE)
            }
            Capability::VoltageLimit => CapabilitySpec::new(
                "VOLT:RANG",
                Both,
                const {
                    &[param(
                        "limit",
                        Rule::Numeric {
                            unit: BaseUnit::Volt,
                            bound: Bound::Fixed {
                                min: 0.0,
                                max: 30.0,
                            },
                            symbols: MIN_MAX_DEF,
                        },
                    )]
                },
            ),
            Capability::ServiceRequestEnable => CapabilitySpec::new("*SRE", Both, REGISTER),
            Capability::StatusByte => CapabilitySpec::new("*STB", Query, NO_PARAMS),
            Capability::OperationCondition => {
                CapabilitySpec::new("STAT:OPER:COND", Query, NO_PARAMS)
            }
            Capability::OperationEnable => CapabilitySpec::new("STAT:OPER:ENAB", Both, REGISTER),
            Capability::OperationEvent => CapabilitySpec::new("STAT:OPER", Query, NO_PARAMS),
            Capability::QuestionableCondition => {
                CapabilitySpec::new("STAT:QUES:COND", Query, NO_PARAMS)
            }
            Capability::QuestionableEnable => {
                CapabilitySpec::new("STAT:QUES:ENAB", Both, REGISTER)
            }
            Capability::QuestionableEvent => CapabilitySpec::new("STAT:QUES", Query, NO_PARAMS),
            Capability::QuestionableNtr => CapabilitySpec::new("STAT:QUES:NTR", Both, REGISTER),
            Capability::QuestionablePtr => CapabilitySpec::new("STAT:QUES:PTR", Both, REGISTER),
            Capability::Error => CapabilitySpec::new("SYST:ERR", Query, NO_PARAMS),
            Capability::Key => CapabilitySpec::new(
                "SYST:KEY",
                Write,
                const {
                    &[param(
                        "code",
                        Rule::Integer {
                            allowed: &[(1, 22), (64, 64)],
                            symbols: NO_SYMBOLS,
                        },
                    )]
                },
            ),
            Capability::Local => CapabilitySpec::new("SYST:LOC", Write, NO_PARAMS),
            Capability::SystemPowerOnState => CapabilitySpec::new("SYST:POS", Both, POWER_ON),
            Capability::Remote => CapabilitySpec::new("SYST:REM", Write, NO_PARAMS),
            Capability::RemoteLock => CapabilitySpec::new("SYST:RWL", Write, NO_PARAMS),
            Capability::ScpiVersion => CapabilitySpec::new("SYST:VER", Query, NO_PARAMS),
            Capability::Trigger => CapabilitySpec::new("*TRG", Write, NO_PARAMS),
            Capability::ForceTrigger => CapabilitySpec::new("TRIG", Write, NO_PARAMS),
            Capability::TriggerSource => CapabilitySpec::new(
                "TRIG:SOUR",
                Both,
                const { &[param("source", Rule::Token(&["MAN", "IMM", "EXT", "BUS"]))] },
            ),
            Capability::SelfTest => CapabilitySpec::new("*TST", Query, NO_PARAMS),
            Capability::Wait => CapabilitySpec::new("*WAI", Write, NO_PARAMS),
        }
    }

    /// SCPI header of this capability, e.g. `VOLT:PROT`.
    pub const fn header(self) -> &'static str {
        self.spec().header
    }
}
