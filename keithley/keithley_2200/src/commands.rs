//! Typed shortcuts for every capability.
//!
//! Setters take anything that converts into an [`Arg`] and go through
//! [`Keithley2200::apply`]. Getters return the reply of the instrument as is, except for
//! measurements, which are parsed into [`measurements`] types.

use instrument_channel::InstrumentChannel;
use measurements::{Current, Power, Voltage};

use crate::{Arg, Capability, Keithley2200, Keithley2200Error};

impl<T: InstrumentChannel> Keithley2200<T> {
    fn send(&mut self, capability: Capability) -> Result<(), Keithley2200Error> {
        self.apply(capability, &[])
    }

    fn set(
        &mut self,
        capability: Capability,
        arg: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.apply(capability, &[arg.into()])
    }

    fn set_step(
        &mut self,
        capability: Capability,
        step: impl Into<Arg>,
        value: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.apply(capability, &[step.into(), value.into()])
    }

    fn get_step(
        &mut self,
        capability: Capability,
        step: impl Into<Arg>,
    ) -> Result<String, Keithley2200Error> {
        self.query_with(capability, &[step.into()])
    }

    // Common commands

    /// Clear all event registers and the error queue (`*CLS`).
    pub fn clear_status(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::ClearStatus)
    }

    /// Set the operation complete bit once all pending commands are done (`*OPC`).
    pub fn operation_complete(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::OperationComplete)
    }

    /// Wait until all pending commands are done, then return `1` (`*OPC?`).
    pub fn get_operation_complete(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::OperationComplete)
    }

    /// Reset the instrument to its default settings (`*RST`).
    pub fn reset(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::Reset)
    }

    /// Send a bus trigger (`*TRG`).
    pub fn trigger(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::Trigger)
    }

    /// Wait until all pending commands are done (`*WAI`).
    pub fn wait(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::Wait)
    }

    /// Run the self test and return its result, `0` meaning passed (`*TST?`).
    pub fn self_test(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::SelfTest)
    }

    /// Save the current setup to memory 1 to 40 (`*SAV`).
    pub fn save_setup(&mut self, memory: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::SaveSetup, memory)
    }

    /// Recall a setup from memory 0 to 40 (`*RCL`).
    pub fn recall_setup(&mut self, memory: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::RecallSetup, memory)
    }

    /// Set whether the status registers are cleared at power on (`*PSC`), `0` or `1`.
    pub fn set_power_on_status_clear(
        &mut self,
        flag: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set(Capability::PowerOnStatusClear, flag)
    }

    /// Get the power-on status clear flag (`*PSC?`).
    pub fn get_power_on_status_clear(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::PowerOnStatusClear)
    }

    // Status registers

    /// Set the Standard Event Status Enable register (`*ESE`), 0 to 255.
    pub fn set_event_status_enable(
        &mut self,
        bits: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set(Capability::EventStatusEnable, bits)
    }

    /// Get the Standard Event Status Enable register (`*ESE?`).
    pub fn get_event_status_enable(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::EventStatusEnable)
    }

    /// Read and clear the Standard Event Status register (`*ESR?`).
    pub fn get_event_status_register(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::EventStatusRegister)
    }

    /// Set the Service Request Enable register (`*SRE`), 0 to 255.
    pub fn set_service_request_enable(
        &mut self,
        bits: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set(Capability::ServiceRequestEnable, bits)
    }

    /// Get the Service Request Enable register (`*SRE?`).
    pub fn get_service_request_enable(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::ServiceRequestEnable)
    }

    /// Read the Status Byte register (`*STB?`).
    pub fn get_status_byte(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::StatusByte)
    }

    /// Read the Operation Condition register (`STAT:OPER:COND?`).
    pub fn get_operation_condition(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::OperationCondition)
    }

    /// Set the Operation Enable register (`STAT:OPER:ENAB`), 0 to 255.
    pub fn set_operation_enable(&mut self, bits: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::OperationEnable, bits)
    }

    /// Get the Operation Enable register (`STAT:OPER:ENAB?`).
    pub fn get_operation_enable(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::OperationEnable)
    }

    /// Read and clear the Operation Event register (`STAT:OPER?`).
    pub fn get_operation_event(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::OperationEvent)
    }

    /// Read the Questionable Condition register (`STAT:QUES:COND?`).
    pub fn get_questionable_condition(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::QuestionableCondition)
    }

    /// Set the Questionable Enable register (`STAT:QUES:ENAB`), 0 to 255.
    pub fn set_questionable_enable(
        &mut self,
        bits: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set(Capability::QuestionableEnable, bits)
    }

    /// Get the Questionable Enable register (`STAT:QUES:ENAB?`).
    pub fn get_questionable_enable(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::QuestionableEnable)
    }

    /// Read and clear the Questionable Event register (`STAT:QUES?`).
    pub fn get_questionable_event(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::QuestionableEvent)
    }

    /// Set the Questionable negative transition filter (`STAT:QUES:NTR`), 0 to 255.
    pub fn set_questionable_ntr(&mut self, bits: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::QuestionableNtr, bits)
    }

    /// Get the Questionable negative transition filter (`STAT:QUES:NTR?`).
    pub fn get_questionable_ntr(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::QuestionableNtr)
    }

    /// Set the Questionable positive transition filter (`STAT:QUES:PTR`), 0 to 255.
    pub fn set_questionable_ptr(&mut self, bits: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::QuestionablePtr, bits)
    }

    /// Get the Questionable positive transition filter (`STAT:QUES:PTR?`).
    pub fn get_questionable_ptr(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::QuestionablePtr)
    }

    // Source

    /// Set the current setpoint (`CURR`).
    ///
    /// The limit depends on the model, e.g. 1.5 A for a 2220-30-1. `MIN`, `MAX`, and `DEF` are
    /// passed on as is.
    pub fn set_current(&mut self, current: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::Current, current)
    }

    /// Get the current setpoint (`CURR?`).
    pub fn get_current(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::Current)
    }

    /// Set the voltage setpoint (`VOLT`), 0 to 30 V.
    pub fn set_voltage(&mut self, voltage: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::Voltage, voltage)
    }

    /// Get the voltage setpoint (`VOLT?`).
    pub fn get_voltage(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::Voltage)
    }

    /// Set the over voltage protection level (`VOLT:PROT`), 0 to 30 V.
    pub fn set_ovp_level(&mut self, level: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::OverVoltageProtection, level)
    }

    /// Get the over voltage protection level (`VOLT:PROT?`).
    pub fn get_ovp_level(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::OverVoltageProtection)
    }

    /// Turn the over voltage protection on or off (`VOLT:PROT:STAT`).
    pub fn set_ovp_state(&mut self, state: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::OverVoltageProtectionState, state)
    }

    /// Get the state of the over voltage protection (`VOLT:PROT:STAT?`).
    pub fn get_ovp_state(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::OverVoltageProtectionState)
    }

    /// Set the maximum voltage that can be programmed (`VOLT:RANG`), 0 to 30 V.
    pub fn set_voltage_limit(&mut self, limit: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::VoltageLimit, limit)
    }

    /// Get the maximum voltage that can be programmed (`VOLT:RANG?`).
    pub fn get_voltage_limit(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::VoltageLimit)
    }

    /// Set whether the instrument runs a fixed setpoint or a list (`FUNC:MODE`).
    pub fn set_function_mode(&mut self, mode: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::FunctionMode, mode)
    }

    /// Get the function mode (`FUNC:MODE?`).
    pub fn get_function_mode(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::FunctionMode)
    }

    // Output

    /// Turn the output on or off (`OUTP`).
    pub fn set_output(&mut self, state: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::Output, state)
    }

    /// Get the output state (`OUTP?`).
    pub fn get_output(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::Output)
    }

    /// Clear a tripped over voltage or over temperature protection (`OUTP:PROT:CLE`).
    pub fn clear_protection(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::ClearProtection)
    }

    /// Turn the output timer on or off (`OUTP:TIM`).
    pub fn set_timer(&mut self, state: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::Timer, state)
    }

    /// Get the state of the output timer (`OUTP:TIM?`).
    pub fn get_timer(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::Timer)
    }

    /// Set how long the output stays on when the timer is used (`OUTP:TIM:DEL`), 0.01 to
    /// 60000 s.
    pub fn set_timer_delay(&mut self, delay: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::TimerDelay, delay)
    }

    /// Get the delay of the output timer (`OUTP:TIM:DEL?`).
    pub fn get_timer_delay(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::TimerDelay)
    }

    /// Set the output state after power on (`OUTP:PON`), `RST` or `RCL0`.
    pub fn set_power_on_state(&mut self, state: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::PowerOnState, state)
    }

    /// Get the output state after power on (`OUTP:PON?`).
    pub fn get_power_on_state(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::PowerOnState)
    }

    /// Set the mode of the remote inhibit pin (`OUTP:RI:MODE`).
    pub fn set_ri_mode(&mut self, mode: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::RiMode, mode)
    }

    /// Get the mode of the remote inhibit pin (`OUTP:RI:MODE?`).
    pub fn get_ri_mode(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::RiMode)
    }

    /// Set the status bit that drives the discrete fault indicator (`OUTP:DFI:SOUR`).
    pub fn set_dfi_source(&mut self, source: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::DfiSource, source)
    }

    /// Get the source of the discrete fault indicator (`OUTP:DFI:SOUR?`).
    pub fn get_dfi_source(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::DfiSource)
    }

    // Digital lines

    /// Set the function of the rear panel TTL lines (`DIG:FUNC`).
    pub fn set_digital_function(
        &mut self,
        function: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set(Capability::DigitalFunction, function)
    }

    /// Get the function of the rear panel TTL lines (`DIG:FUNC?`).
    pub fn get_digital_function(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::DigitalFunction)
    }

    /// Set the level of the TTL output line (`DIG:DATA`).
    pub fn set_ttl_level(&mut self, level: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::TtlLevel, level)
    }

    /// Get the level of the TTL output line (`DIG:DATA?`).
    pub fn get_ttl_level(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::TtlLevel)
    }

    // Lists

    /// Set the current of a list step (`LIST:CURR`).
    ///
    /// # Arguments
    /// * `step` - The step, 1 to 80.
    /// * `current` - The current, limited by the model.
    pub fn set_list_current(
        &mut self,
        step: impl Into<Arg>,
        current: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set_step(Capability::ListCurrent, step, current)
    }

    /// Get the current of a list step (`LIST:CURR? n`).
    pub fn get_list_current(&mut self, step: impl Into<Arg>) -> Result<String, Keithley2200Error> {
        self.get_step(Capability::ListCurrent, step)
    }

    /// Set the voltage of a list step (`LIST:VOLT`).
    ///
    /// # Arguments
    /// * `step` - The step, 1 to 80.
    /// * `voltage` - The voltage, limited by the model.
    pub fn set_list_voltage(
        &mut self,
        step: impl Into<Arg>,
        voltage: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set_step(Capability::ListVoltage, step, voltage)
    }

    /// Get the voltage of a list step (`LIST:VOLT? n`).
    pub fn get_list_voltage(&mut self, step: impl Into<Arg>) -> Result<String, Keithley2200Error> {
        self.get_step(Capability::ListVoltage, step)
    }

    /// Set the duration of a list step (`LIST:WIDT`).
    ///
    /// # Arguments
    /// * `step` - The step, 1 to 80.
    /// * `width` - The duration, e.g. a [`std::time::Duration`].
    pub fn set_list_width(
        &mut self,
        step: impl Into<Arg>,
        width: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set_step(Capability::ListWidth, step, width)
    }

    /// Get the duration of a list step (`LIST:WIDT? n`).
    pub fn get_list_width(&mut self, step: impl Into<Arg>) -> Result<String, Keithley2200Error> {
        self.get_step(Capability::ListWidth, step)
    }

    /// Set how often the list is run (`LIST:COUN`), 2 to 65535.
    pub fn set_list_count(&mut self, count: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::ListCount, count)
    }

    /// Get how often the list is run (`LIST:COUN?`).
    pub fn get_list_count(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::ListCount)
    }

    /// Set the number of steps of the list (`LIST:STEP`), 2 to 80.
    pub fn set_list_steps(&mut self, steps: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::ListSteps, steps)
    }

    /// Get the number of steps of the list (`LIST:STEP?`).
    pub fn get_list_steps(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::ListSteps)
    }

    /// Set whether the list runs continuously or one step per trigger (`LIST:MODE`).
    pub fn set_list_mode(&mut self, mode: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::ListMode, mode)
    }

    /// Get the list mode (`LIST:MODE?`).
    pub fn get_list_mode(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::ListMode)
    }

    /// Save the list to memory 1 to 8 (`LIST:SAV`).
    pub fn save_list(&mut self, memory: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::ListSave, memory)
    }

    /// Recall a list from memory 1 to 8 (`LIST:RCL`).
    pub fn recall_list(&mut self, memory: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::ListRecall, memory)
    }

    // Trigger

    /// Trigger immediately, regardless of the trigger source (`TRIG`).
    pub fn force_trigger(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::ForceTrigger)
    }

    /// Set the trigger source (`TRIG:SOUR`).
    pub fn set_trigger_source(&mut self, source: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::TriggerSource, source)
    }

    /// Get the trigger source (`TRIG:SOUR?`).
    pub fn get_trigger_source(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::TriggerSource)
    }

    // System

    /// Turn the key beep on or off (`CONF:SOUN`).
    pub fn set_beep(&mut self, state: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::Beep, state)
    }

    /// Get the state of the key beep (`CONF:SOUN?`).
    pub fn get_beep(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::Beep)
    }

    /// Get the next entry of the error queue (`SYST:ERR?`), e.g. `0,"No error"`.
    pub fn get_error(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::Error)
    }

    /// Simulate a key press on the front panel (`SYST:KEY`), 1 to 22 or 64.
    pub fn press_key(&mut self, code: impl Into<Arg>) -> Result<(), Keithley2200Error> {
        self.set(Capability::Key, code)
    }

    /// Return control to the front panel (`SYST:LOC`).
    pub fn set_local(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::Local)
    }

    /// Take remote control (`SYST:REM`).
    pub fn set_remote(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::Remote)
    }

    /// Take remote control and lock out the LOCAL key (`SYST:RWL`).
    pub fn set_remote_lock(&mut self) -> Result<(), Keithley2200Error> {
        self.send(Capability::RemoteLock)
    }

    /// Set the settings used after power on (`SYST:POS`), `RST` or `RCL0`.
    pub fn set_system_power_on_state(
        &mut self,
        state: impl Into<Arg>,
    ) -> Result<(), Keithley2200Error> {
        self.set(Capability::SystemPowerOnState, state)
    }

    /// Get the settings used after power on (`SYST:POS?`).
    pub fn get_system_power_on_state(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::SystemPowerOnState)
    }

    /// Get the SCPI version of the instrument (`SYST:VER?`).
    pub fn get_scpi_version(&mut self) -> Result<String, Keithley2200Error> {
        self.query(Capability::ScpiVersion)
    }

    // Measurements

    /// Measure the output voltage (`MEAS:VOLT?`).
    pub fn measure_voltage(&mut self) -> Result<Voltage, Keithley2200Error> {
        Ok(Voltage::from_volts(
            self.query_reading(Capability::MeasureVoltage)?,
        ))
    }

    /// Measure the output current (`MEAS:CURR?`).
    pub fn measure_current(&mut self) -> Result<Current, Keithley2200Error> {
        Ok(Current::from_amperes(
            self.query_reading(Capability::MeasureCurrent)?,
        ))
    }

    /// Measure the output power (`MEAS:POW?`).
    pub fn measure_power(&mut self) -> Result<Power, Keithley2200Error> {
        Ok(Power::from_watts(self.query_reading(Capability::MeasurePower)?))
    }

    /// Get the last measured voltage without starting a new measurement (`FETC:VOLT?`).
    pub fn fetch_voltage(&mut self) -> Result<Voltage, Keithley2200Error> {
        Ok(Voltage::from_volts(
            self.query_reading(Capability::FetchVoltage)?,
        ))
    }

    /// Get the last measured current without starting a new measurement (`FETC:CURR?`).
    pub fn fetch_current(&mut self) -> Result<Current, Keithley2200Error> {
        Ok(Current::from_amperes(
            self.query_reading(Capability::FetchCurrent)?,
        ))
    }

    /// Get the last measured power without starting a new measurement (`FETC:POW?`).
    pub fn fetch_power(&mut self) -> Result<Power, Keithley2200Error> {
        Ok(Power::from_watts(self.query_reading(Capability::FetchPower)?))
    }
}
