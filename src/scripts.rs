//! Documentation about the checks contained herein
//!
//! - [check-cpu-by-snmp](#check-cpu-by-snmp)
//! - [check-load-by-snmp](#check-load-by-snmp)
//! - [check-mem-by-snmp](#check-mem-by-snmp)
//! - [check-swap-by-snmp](#check-swap-by-snmp)
//! - [check-fs-by-snmp](#check-fs-by-snmp)
//! - [check-proc-cnt-by-snmp](#check-proc-cnt-by-snmp)
//! - [check-user-cnt-by-snmp](#check-user-cnt-by-snmp)
//! - [check-procs-by-snmp](#check-procs-by-snmp)
//! - [check-snmp-agent-avail](#check-snmp-agent-avail)
//! - [check-snmp-daemon-avail](#check-snmp-daemon-avail)
//!
//! # check-cpu-by-snmp
//!
//! Works with smart-snmpd and net-snmpd.
//!
//! ```plain
//! $ check-cpu-by-snmp --help
//! check-cpu-by-snmp
//! Check CPU usage via SNMP
//!
//! USAGE:
//!     check-cpu-by-snmp [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      user,system,idle,wait percentages to go critical at
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd, net-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      user,system,idle,wait percentages to warn at
//! ```
//!
//! # check-load-by-snmp
//!
//! Works with smart-snmpd and net-snmpd.
//!
//! ```plain
//! $ check-load-by-snmp --help
//! check-load-by-snmp
//! Check the load average of a remote host via SNMP
//!
//! USAGE:
//!     check-load-by-snmp [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      load1,load5,load15 to go critical at
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd, net-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      load1,load5,load15 to warn at
//! ```
//!
//! # check-mem-by-snmp
//!
//! Works with smart-snmpd and net-snmpd.
//!
//! ```plain
//! $ check-mem-by-snmp --help
//! check-mem-by-snmp
//! Available physical memory via SNMP
//!
//! USAGE:
//!     check-mem-by-snmp [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      available size or usage to go critical at
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd, net-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      available size or usage to warn at
//! ```
//!
//! # check-swap-by-snmp
//!
//! Works with smart-snmpd and net-snmpd.
//!
//! ```plain
//! $ check-swap-by-snmp --help
//! check-swap-by-snmp
//! Available swap space via SNMP
//!
//! USAGE:
//!     check-swap-by-snmp [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      available size or usage to go critical at
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd, net-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      available size or usage to warn at
//! ```
//!
//! # check-fs-by-snmp
//!
//! Works with smart-snmpd and net-snmpd (HOST-RESOURCES-MIB storage table).
//!
//! ```plain
//! $ check-fs-by-snmp --help
//! check-fs-by-snmp
//! Check file system storage via SNMP
//!
//! USAGE:
//!     check-fs-by-snmp [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      free space or usage to go critical at
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -i, --index <index>                                    table index of object to check
//!     -n, --name <name>                                      name of the object to check
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd, net-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      free space or usage to warn at
//! ```
//!
//! # check-proc-cnt-by-snmp
//!
//! Works with smart-snmpd and net-snmpd.
//!
//! ```plain
//! $ check-proc-cnt-by-snmp --help
//! check-proc-cnt-by-snmp
//! Check count of running processes via SNMP
//!
//! USAGE:
//!     check-proc-cnt-by-snmp [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      process count to go critical at
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd, net-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      process count to warn at
//! ```
//!
//! # check-user-cnt-by-snmp
//!
//! Works with smart-snmpd and net-snmpd.
//!
//! ```plain
//! $ check-user-cnt-by-snmp --help
//! check-user-cnt-by-snmp
//! Check logged in user count via SNMP
//!
//! USAGE:
//!     check-user-cnt-by-snmp [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      user count to go critical at
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd, net-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      user count to warn at
//! ```
//!
//! # check-procs-by-snmp
//!
//! Needs smart-snmpd.
//!
//! ```plain
//! $ check-procs-by-snmp --help
//! check-procs-by-snmp
//! Check count of a certain running process via SNMP
//!
//! USAGE:
//!     check-procs-by-snmp [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      range of process counts that is not critical
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -A, --process-argument <argument>                      regular expression matching one of the arguments of the processes to count
//!     -P, --process-command <command>                        regular expression matching the command of the processes to count
//!     -G, --process-effective-groupname <eff-groupname>      effective group name of the process
//!     -U, --process-effective-username <eff-username>        effective user name of the process
//!     -g, --process-groupname <groupname>                    group name of the process owner
//!     -u, --process-username <username>                      user name of the process owner
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      range of process counts that is fine
//! ```
//!
//! # check-snmp-agent-avail
//!
//! Needs smart-snmpd.
//!
//! ```plain
//! $ check-snmp-agent-avail --help
//! check-snmp-agent-avail
//! Check whether a suitable application monitoring agent is attached to snmpd
//!
//! USAGE:
//!     check-snmp-agent-avail [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -c, --crit <crit>                                      update age and increase counts to go critical at
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//!     -w, --warn <warn>                                      update age and increase counts to warn at
//! ```
//!
//! # check-snmp-daemon-avail
//!
//! Works with smart-snmpd and net-snmpd.
//!
//! ```plain
//! $ check-snmp-daemon-avail --help
//! check-snmp-daemon-avail
//! Check whether a suitable snmpd is available or not
//!
//! USAGE:
//!     check-snmp-daemon-avail [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -v, --version    output the version number
//!
//! OPTIONS:
//!     -a, --alarm-timeout <alarm-timeout>                    seconds after which the check gives up, 0 disables the alarm [default: 45]
//!         --auth-password <auth-password>                    authentication password (SNMPv3)
//!         --auth-protocol <auth-protocol>                    authentication protocol (SNMPv3) [default: none]  [possible values: none, md5, sha]
//!     -C, --community <community>                            snmp community (SNMPv1/v2c)
//!         --context-name <context-name>                      context name (SNMPv3)
//!     -d, --debug-level <debug-level>                        set debug level (0: quiet .. 4: everything) [default: 0]  [possible values: 0, 1, 2, 3, 4]
//!     -H, --host <host>                                      host name (or ip address) of the server to use [default: 127.0.0.1]
//!     -p, --port <port>                                      port to connect [default: 161]
//!         --priv-password <priv-password>                    private password (SNMPv3)
//!         --priv-protocol <priv-protocol>                    private protocol (SNMPv3) [default: none]  [possible values: none, des, 3des, idea, aes128, aes192, aes256]
//!     -r, --retries <retries>                                amount of retries [default: 2]
//!         --security-level <security-level>                  security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv
//!         --security-name <security-name>                    security name (SNMPv3)
//!         --show-performance-data <show-performance-data>    enable or disable output of performance data
//!     -V, --snmp-version <snmp-version>                      snmp protocol version: 1, 2c or 3 [default: 1]
//!     -s, --snmpd-type <snmpd-type>                          name of the snmpd type to query: smart-snmpd, net-snmpd [default: auto]
//!     -t, --timeout <timeout>                                timeout in seconds [default: 5]
//! ```
